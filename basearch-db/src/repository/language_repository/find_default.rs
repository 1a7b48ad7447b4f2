use basearch_api::{AccessError, AccessResult};

use super::repo_impl::LanguageRepositoryImpl;
use crate::models::language::{LanguageAttribute, LanguageModel};

impl LanguageRepositoryImpl {
    /// The language flagged `is_default`
    ///
    /// # Returns
    /// * `Ok(LanguageModel)` - The single default language
    /// * `Err(AccessError::Configuration)` - If no row, or more than one, is flagged
    pub async fn find_default(&self) -> AccessResult<LanguageModel> {
        let snapshot = self.language_cache.snapshot();
        if let Some(default) = snapshot.default_entry() {
            return Ok(default.clone());
        }

        let default = match self.languages.with(LanguageAttribute::IsDefault, true).find().await {
            Ok(Some(default)) => default,
            Ok(None) => {
                return Err(AccessError::Configuration(
                    "no default language is configured".to_string(),
                ))
            }
            Err(AccessError::AmbiguousResult { matches, .. }) => {
                return Err(AccessError::Configuration(format!(
                    "{matches} languages are flagged as default, expected exactly one"
                )))
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(language = %default.lang_code, "loaded default language");
        self.language_cache.fill_default(snapshot.generation(), default.clone());
        Ok(default)
    }
}
