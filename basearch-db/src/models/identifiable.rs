use uuid::Uuid;

/// Trait for entities that carry a surrogate UUID identifier
///
/// The identifier never changes once the entity is persisted.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
