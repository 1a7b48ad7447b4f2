//! Test helper module for transaction-based test isolation
//!
//! Each test context runs in its own transaction, which is rolled back when the
//! context is dropped, so tests need no cleanup.

use basearch_db::models::UserModel;
use heapless::String as HeaplessString;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::executor::Executor;
use crate::postgres_repositories::{LocaleRepositories, PostgresRepositories};

/// Test context holding repositories bound to one uncommitted transaction.
pub struct TestContext {
    pub locale_repos: LocaleRepositories,
}

impl TestContext {
    pub fn locale_repos(&self) -> &LocaleRepositories {
        &self.locale_repos
    }
}

/// Connects with a single connection, applies migrations and opens a transaction
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = DatabaseConfig::from_env()?;
    config.max_connections = 1;
    let pool = config.connect().await?;

    sqlx::migrate!().run(&pool).await?;

    let repos = PostgresRepositories::new(Arc::new(pool));
    let locale_repos = repos.create_locale_repositories().await?;

    Ok(TestContext { locale_repos })
}

/// Setup a shared PostgresRepositories for tests that span several units of work
pub async fn setup_shared_repos() -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env()?.connect().await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(PostgresRepositories::new(Arc::new(pool)))
}

/// Users are created outside the core, so tests insert them with plain SQL.
pub async fn insert_test_user(
    executor: &Executor,
    username: &str,
    locale: Option<&str>,
) -> Result<UserModel, Box<dyn std::error::Error + Send + Sync>> {
    let user = UserModel {
        id: Uuid::new_v4(),
        username: HeaplessString::try_from(username).map_err(|_| "username too long")?,
        locale: locale
            .map(HeaplessString::try_from)
            .transpose()
            .map_err(|_| "locale too long")?,
    };

    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or("transaction already finished")?;
    sqlx::query("INSERT INTO users (id, username, locale) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(user.username.as_str())
        .bind(user.locale.as_ref().map(|l| l.as_str()))
        .execute(&mut **transaction)
        .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basearch_db::repository::find_by_id::FindById;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance at DATABASE_URL"]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let user_id = {
            let ctx = setup_test_context().await?;
            let repos = ctx.locale_repos();
            let user = insert_test_user(&repos.executor, "rollback_user", None).await?;

            let loaded = repos.user_repository.find_by_id(user.id).await?;
            assert!(loaded.is_some());
            user.id
        }; // Transaction is rolled back here when ctx is dropped

        let ctx = setup_test_context().await?;
        let loaded = ctx.locale_repos().user_repository.find_by_id(user_id).await?;
        assert!(loaded.is_none());
        Ok(())
    }
}
