use async_trait::async_trait;
use basearch_api::StoreError;
use uuid::Uuid;

use super::record::{Constraint, Record};
use crate::models::table::EntityTable;

/// Contract between the entity accessor and a storage engine
///
/// Implementations execute each call as one round trip and report failures as
/// [`StoreError`]; they never retry.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl StoreGateway for PgStoreGateway {
///     async fn query(&self, table: &'static EntityTable, constraints: &[Constraint]) -> Result<Vec<Record>, StoreError> {
///         // SELECT ... WHERE c1 = $1 AND c2 = $2
///     }
/// }
/// ```
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Fetch one record by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Record))` - The record
    /// * `Ok(None)` - If no record has that identifier
    /// * `Err` - If the store could not be reached or the row could not be decoded
    async fn fetch_by_id(&self, table: &'static EntityTable, id: Uuid) -> Result<Option<Record>, StoreError>;

    /// Fetch every record satisfying all constraints; no constraints means the whole table
    async fn query(
        &self,
        table: &'static EntityTable,
        constraints: &[Constraint],
    ) -> Result<Vec<Record>, StoreError>;

    /// Overwrite the stored row with the record's values
    ///
    /// # Returns
    /// * `Ok(())` - The row was updated
    /// * `Err(StoreError::MissingRow)` - If no row has the record's identifier
    async fn update(&self, table: &'static EntityTable, record: &Record) -> Result<(), StoreError>;
}
