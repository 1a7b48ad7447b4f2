use basearch_api::StoreError;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use super::attribute::{Attribute, ValueKind};
use super::entity::Entity;
use super::identifiable::Identifiable;
use super::table::{ColumnDef, EntityTable};
use crate::gateway::Record;

pub const USERNAME_MAX_LEN: usize = 50;
pub const LOCALE_TAG_MAX_LEN: usize = 20;

/// # Documentation
/// - Authenticated identity; created outside this core
/// - `locale` holds the stored preference as a tag and may be absent or stale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,

    pub username: HeaplessString<USERNAME_MAX_LEN>,

    pub locale: Option<HeaplessString<LOCALE_TAG_MAX_LEN>>,
}

impl UserModel {
    pub fn stored_locale(&self) -> Option<&str> {
        self.locale.as_ref().map(|l| l.as_str()).filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAttribute {
    Username,
    Locale,
}

static USER_COLUMNS: [ColumnDef; 2] = [
    ColumnDef::required("username", ValueKind::Text),
    ColumnDef::optional("locale", ValueKind::Text),
];

pub static USER_TABLE: EntityTable = EntityTable {
    name: "users",
    columns: &USER_COLUMNS,
};

impl Attribute for UserAttribute {
    fn all() -> &'static [Self] {
        &[UserAttribute::Username, UserAttribute::Locale]
    }

    fn name(self) -> &'static str {
        match self {
            UserAttribute::Username => "username",
            UserAttribute::Locale => "locale",
        }
    }

    fn column(self) -> &'static ColumnDef {
        match self {
            UserAttribute::Username => &USER_COLUMNS[0],
            UserAttribute::Locale => &USER_COLUMNS[1],
        }
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Entity for UserModel {
    type Attribute = UserAttribute;

    fn table() -> &'static EntityTable {
        &USER_TABLE
    }

    fn to_record(&self) -> Record {
        Record::new(USER_TABLE.name, self.id)
            .with("username", &self.username)
            .with_optional("locale", self.locale.as_ref())
    }

    fn from_record(record: Record) -> Result<Self, StoreError> {
        Ok(UserModel {
            id: record.id(),
            username: record.heapless("username")?,
            locale: record.optional_heapless("locale")?,
        })
    }

    fn natural_order(&self, other: &Self) -> Ordering {
        self.username.cmp(&other.username)
    }
}
