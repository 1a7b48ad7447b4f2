use async_trait::async_trait;
use basearch_api::AccessResult;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing every entity of a small table
///
/// Intended for reference data and admin listings; there is no paging.
#[async_trait]
pub trait FindAll<T: Identifiable>: Send + Sync {
    /// List all entities
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Every entity, in the entity's natural order
    /// * `Err` - An error if the store could not be queried
    async fn find_all(&self) -> AccessResult<Vec<T>>;
}
