use async_trait::async_trait;
use basearch_api::AccessResult;
use std::sync::Arc;

use super::repo_impl::LanguageRepositoryImpl;
use crate::models::language::LanguageModel;
use crate::repository::find_all::FindAll;

impl LanguageRepositoryImpl {
    /// The cached catalog, loaded from the store on first use.
    pub async fn catalog(&self) -> AccessResult<Arc<Vec<LanguageModel>>> {
        let snapshot = self.language_cache.snapshot();
        if let Some(all) = snapshot.all() {
            return Ok(all);
        }

        let loaded = self.languages.list_all().await?;
        tracing::debug!(languages = loaded.len(), "loaded language catalog");
        Ok(self.language_cache.fill_all(snapshot.generation(), loaded))
    }
}

#[async_trait]
impl FindAll<LanguageModel> for LanguageRepositoryImpl {
    async fn find_all(&self) -> AccessResult<Vec<LanguageModel>> {
        let catalog = self.catalog().await?;
        Ok(catalog.to_vec())
    }
}
