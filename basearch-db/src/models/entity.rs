use basearch_api::StoreError;
use std::cmp::Ordering;

use super::attribute::Attribute;
use super::identifiable::Identifiable;
use super::table::EntityTable;
use crate::gateway::Record;

/// A persistent domain object reachable through the entity accessor
///
/// Implementors describe their table, their attribute registry and how they map
/// to and from a store-neutral [`Record`].
pub trait Entity: Identifiable + Clone + Send + Sync + 'static {
    /// Attribute registry for constraint building
    type Attribute: Attribute;

    /// Table backing the entity type
    fn table() -> &'static EntityTable;

    /// Converts the entity into a record for the store
    fn to_record(&self) -> Record;

    /// Rebuilds the entity from a record returned by the store
    fn from_record(record: Record) -> Result<Self, StoreError>;

    /// Natural ordering used by `list_all`; entities without one compare equal
    fn natural_order(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}
