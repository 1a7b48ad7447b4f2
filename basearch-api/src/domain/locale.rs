use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

pub const LANGUAGE_MAX_LEN: usize = 3;
pub const REGION_MAX_LEN: usize = 3;
pub const VARIANT_MAX_LEN: usize = 8;

/// # Documentation
/// - Language/region/variant identifier used for localization
/// - Language is stored lower-cased and region upper-cased, so `es-es` and `es-ES`
///   compare equal
/// - Serialized as its tag (`lang`, `lang-REGION` or `lang-REGION-variant`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: HeaplessString<LANGUAGE_MAX_LEN>,
    region: Option<HeaplessString<REGION_MAX_LEN>>,
    variant: Option<HeaplessString<VARIANT_MAX_LEN>>,
}

impl Locale {
    pub fn new(
        language: &str,
        region: Option<&str>,
        variant: Option<&str>,
    ) -> Result<Self, LocaleError> {
        if variant.is_some() && region.is_none() {
            return Err(LocaleError::VariantWithoutRegion);
        }

        let language = to_part::<LANGUAGE_MAX_LEN>("language", &language.to_ascii_lowercase())?;
        let region = region
            .map(|r| to_part::<REGION_MAX_LEN>("region", &r.to_ascii_uppercase()))
            .transpose()?;
        let variant = variant
            .map(|v| to_part::<VARIANT_MAX_LEN>("variant", v))
            .transpose()?;

        Ok(Self {
            language,
            region,
            variant,
        })
    }

    /// Parses a tag such as `fr`, `es-ES`, `en_GB` or `ca-ES-valencia`.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }

        let parts: Vec<&str> = tag.split(['-', '_']).collect();
        match parts.as_slice() {
            [language] => Self::new(language, None, None),
            [language, region] => Self::new(language, Some(region), None),
            [language, region, variant] => Self::new(language, Some(region), Some(variant)),
            _ => Err(LocaleError::TooManyParts(tag.to_string())),
        }
    }

    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.as_str())
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_ref().map(|v| v.as_str())
    }

    pub fn to_tag(&self) -> String {
        self.to_string()
    }
}

fn to_part<const N: usize>(part: &'static str, value: &str) -> Result<HeaplessString<N>, LocaleError> {
    if value.is_empty() {
        return Err(LocaleError::Empty);
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(LocaleError::Malformed {
            part,
            value: value.to_string(),
        });
    }
    HeaplessString::try_from(value).map_err(|_| LocaleError::TooLong {
        part,
        value: value.to_string(),
        max: N,
    })
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
            if let Some(variant) = &self.variant {
                write!(f, "-{variant}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
