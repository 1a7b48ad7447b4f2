use async_trait::async_trait;
use basearch_api::AccessResult;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding entities by their ID
///
/// Any entity that implements the Identifiable trait can be queried using this trait.
/// Returns an Option to handle cases where the entity might not exist.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindById<LanguageModel> for LanguageRepositoryImpl {
///     async fn find_by_id(&self, id: Uuid) -> AccessResult<Option<LanguageModel>> {
///         self.languages.by_id(id).await
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - If the id is nil or the store could not be queried
    async fn find_by_id(&self, id: Uuid) -> AccessResult<Option<T>>;
}
