//! Store gateway contract and the in-memory implementation.
//!
//! The core talks to storage only through [`StoreGateway`]: fetch by id, conjunctive
//! equality query, and single-record update. Tables and columns come from the static
//! registries in [`crate::models`], so no implementation ever sees a caller-supplied
//! identifier.

mod in_memory;
mod record;
mod store_gateway;

pub use in_memory::InMemoryStore;
pub use record::{Constraint, Record};
pub use store_gateway::StoreGateway;
