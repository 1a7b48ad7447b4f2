use basearch_api::StoreError;
use basearch_db::{
    EntityStore, LanguageCatalogCache, LanguageRepositoryImpl, LocaleResolutionChain, UserRepositoryImpl,
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::executor::Executor;
use crate::repository::PgStoreGateway;

/// Builds repositories per unit of work over one pool.
///
/// The language catalog cache is created once here and handed to every unit of work,
/// so the catalog is read from the database once per process (or per reload).
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    language_cache: Arc<LanguageCatalogCache>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_language_cache(pool, LanguageRepositoryImpl::new_cache())
    }

    pub fn with_language_cache(pool: Arc<PgPool>, language_cache: Arc<LanguageCatalogCache>) -> Self {
        Self { pool, language_cache }
    }

    pub fn language_cache(&self) -> &Arc<LanguageCatalogCache> {
        &self.language_cache
    }

    /// Create all repositories sharing a single transaction
    pub async fn create_locale_repositories(&self) -> Result<LocaleRepositories, StoreError> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);
        let store = EntityStore::new(Arc::new(PgStoreGateway::new(executor.clone())));

        let language_repository = Arc::new(LanguageRepositoryImpl::new(&store, self.language_cache.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(&store));
        let locale_resolver = Arc::new(LocaleResolutionChain::new(
            language_repository.clone(),
            user_repository.clone(),
        ));

        Ok(LocaleRepositories {
            executor,
            language_repository,
            user_repository,
            locale_resolver,
        })
    }
}

pub struct LocaleRepositories {
    pub executor: Executor,
    pub language_repository: Arc<LanguageRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
    pub locale_resolver: Arc<LocaleResolutionChain>,
}

impl LocaleRepositories {
    pub async fn commit(&self) -> Result<(), StoreError> {
        self.executor.commit().await
    }

    pub async fn rollback(&self) -> Result<(), StoreError> {
        self.executor.rollback().await
    }
}
