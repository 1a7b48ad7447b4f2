use async_trait::async_trait;
use basearch_api::AccessResult;
use std::sync::Arc;
use uuid::Uuid;

use crate::accessor::{EntityAccessor, EntityStore};
use crate::cache::ReferenceCache;
use crate::models::language::LanguageModel;
use crate::repository::find_by_id::FindById;

pub const DEFAULT_LANGUAGE_CACHE_CAPACITY: usize = 5;

/// Key of a fully qualified `find_by` lookup, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageKey {
    pub lang_code: String,
    pub region_code: String,
    pub variant_code: String,
}

impl LanguageKey {
    pub fn new(lang_code: &str, region_code: &str, variant_code: &str) -> Self {
        Self {
            lang_code: lang_code.to_string(),
            region_code: region_code.to_string(),
            variant_code: variant_code.to_string(),
        }
    }
}

/// Process-wide language catalog, shared by every repository built for a unit of work.
pub type LanguageCatalogCache = ReferenceCache<LanguageKey, LanguageModel>;

pub struct LanguageRepositoryImpl {
    pub languages: EntityAccessor<LanguageModel>,
    pub language_cache: Arc<LanguageCatalogCache>,
}

impl LanguageRepositoryImpl {
    pub fn new(store: &EntityStore, language_cache: Arc<LanguageCatalogCache>) -> Self {
        Self {
            languages: store.entity::<LanguageModel>(),
            language_cache,
        }
    }

    pub fn new_cache() -> Arc<LanguageCatalogCache> {
        Arc::new(LanguageCatalogCache::new(DEFAULT_LANGUAGE_CACHE_CAPACITY))
    }
}

#[async_trait]
impl FindById<LanguageModel> for LanguageRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AccessResult<Option<LanguageModel>> {
        self.languages.by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::seeded_store;

    #[tokio::test]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = seeded_store();
        let entity_store = EntityStore::new(Arc::new(store.clone()));
        let repo = LanguageRepositoryImpl::new(&entity_store, LanguageRepositoryImpl::new_cache());

        let all = repo.languages.list_all().await?;
        let fr = all.iter().find(|l| l.lang_code.as_str() == "fr").cloned().unwrap();

        assert_eq!(repo.find_by_id(fr.id).await?, Some(fr));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await?, None);
        assert!(repo.find_by_id(Uuid::nil()).await.unwrap_err().is_invalid_argument());
        Ok(())
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(LanguageRepositoryImpl::new_cache().capacity(), DEFAULT_LANGUAGE_CACHE_CAPACITY);
    }
}
