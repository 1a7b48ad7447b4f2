use basearch_api::{AccessResult, Locale};

use super::repo_impl::LanguageRepositoryImpl;
use crate::models::language::LanguageModel;

impl LanguageRepositoryImpl {
    /// Exact match of `locale` against the cached catalog; `es` never matches `es-ES`.
    pub async fn find_by_locale(&self, locale: &Locale) -> AccessResult<Option<LanguageModel>> {
        let catalog = self.catalog().await?;
        Ok(catalog.iter().find(|l| l.matches_locale(locale)).cloned())
    }
}
