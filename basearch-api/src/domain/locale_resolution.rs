use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// Which strategy of the resolution chain produced the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleSource {
    Preference,
    Request,
    Default,
}

/// # Documentation
/// - Outcome of resolving the locale for one request; never persisted
/// - `preference_written` is set when the request locale was stored as the
///   identity's first preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleResolution {
    pub locale: Locale,
    pub source: LocaleSource,
    pub preference_written: bool,
}

impl LocaleResolution {
    pub fn new(locale: Locale, source: LocaleSource) -> Self {
        Self {
            locale,
            source,
            preference_written: false,
        }
    }
}
