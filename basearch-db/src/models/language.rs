use basearch_api::{Locale, LocaleError, StoreError, LANGUAGE_MAX_LEN, REGION_MAX_LEN, VARIANT_MAX_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use super::attribute::{Attribute, ValueKind};
use super::entity::Entity;
use super::identifiable::Identifiable;
use super::table::{ColumnDef, EntityTable};
use crate::gateway::Record;

/// # Documentation
/// - Supported language of the application, seeded at deployment and read-only
/// - Exactly one row carries `is_default`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModel {
    pub id: Uuid,

    pub lang_code: HeaplessString<LANGUAGE_MAX_LEN>,
    pub region_code: Option<HeaplessString<REGION_MAX_LEN>>,
    pub variant_code: Option<HeaplessString<VARIANT_MAX_LEN>>,

    pub is_default: bool,
}

impl LanguageModel {
    /// Derives the locale: language alone without a region, language and region
    /// without a variant, all three otherwise.
    pub fn to_locale(&self) -> Result<Locale, LocaleError> {
        let region = self.region_code.as_ref().map(|r| r.as_str()).filter(|r| !r.is_empty());
        let variant = self.variant_code.as_ref().map(|v| v.as_str()).filter(|v| !v.is_empty());
        match (region, variant) {
            (None, _) => Locale::new(self.lang_code.as_str(), None, None),
            (Some(region), None) => Locale::new(self.lang_code.as_str(), Some(region), None),
            (Some(region), Some(variant)) => {
                Locale::new(self.lang_code.as_str(), Some(region), Some(variant))
            }
        }
    }

    pub fn matches_locale(&self, locale: &Locale) -> bool {
        self.to_locale().map(|own| &own == locale).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageAttribute {
    LangCode,
    RegionCode,
    VariantCode,
    IsDefault,
}

static LANGUAGE_COLUMNS: [ColumnDef; 4] = [
    ColumnDef::required("language", ValueKind::Text),
    ColumnDef::optional("region", ValueKind::Text),
    ColumnDef::optional("variant", ValueKind::Text),
    ColumnDef::required("is_default", ValueKind::Boolean),
];

pub static LANGUAGE_TABLE: EntityTable = EntityTable {
    name: "languages",
    columns: &LANGUAGE_COLUMNS,
};

impl Attribute for LanguageAttribute {
    fn all() -> &'static [Self] {
        &[
            LanguageAttribute::LangCode,
            LanguageAttribute::RegionCode,
            LanguageAttribute::VariantCode,
            LanguageAttribute::IsDefault,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            LanguageAttribute::LangCode => "lang_code",
            LanguageAttribute::RegionCode => "region_code",
            LanguageAttribute::VariantCode => "variant_code",
            LanguageAttribute::IsDefault => "is_default",
        }
    }

    fn column(self) -> &'static ColumnDef {
        match self {
            LanguageAttribute::LangCode => &LANGUAGE_COLUMNS[0],
            LanguageAttribute::RegionCode => &LANGUAGE_COLUMNS[1],
            LanguageAttribute::VariantCode => &LANGUAGE_COLUMNS[2],
            LanguageAttribute::IsDefault => &LANGUAGE_COLUMNS[3],
        }
    }
}

impl Identifiable for LanguageModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Entity for LanguageModel {
    type Attribute = LanguageAttribute;

    fn table() -> &'static EntityTable {
        &LANGUAGE_TABLE
    }

    fn to_record(&self) -> Record {
        Record::new(LANGUAGE_TABLE.name, self.id)
            .with("language", &self.lang_code)
            .with_optional("region", self.region_code.as_ref())
            .with_optional("variant", self.variant_code.as_ref())
            .with("is_default", self.is_default)
    }

    fn from_record(record: Record) -> Result<Self, StoreError> {
        Ok(LanguageModel {
            id: record.id(),
            lang_code: record.heapless("language")?,
            region_code: record.optional_heapless("region")?,
            variant_code: record.optional_heapless("variant")?,
            is_default: record.boolean("is_default")?.unwrap_or(false),
        })
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        (&self.lang_code, &self.region_code, &self.variant_code).cmp(&(
            &other.lang_code,
            &other.region_code,
            &other.variant_code,
        ))
    }
}
