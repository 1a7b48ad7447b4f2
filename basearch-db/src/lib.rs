//! Entity model, store gateway contract and the repositories built on it.
//!
//! Repository implementations live here rather than in `basearch-postgres`: they only
//! talk to a [`StoreGateway`], so the same code runs on the in-memory store and on the
//! sqlx gateway. The postgres crate supplies the gateway and the unit-of-work wiring.

pub mod accessor;
pub mod cache;
pub mod gateway;
pub mod locale;
pub mod models;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_helper;

pub use accessor::{EntityAccessor, EntityStore};
pub use cache::{CatalogSnapshot, ReferenceCache};
pub use gateway::{Constraint, InMemoryStore, Record, StoreGateway};
pub use locale::LocaleResolutionChain;
pub use repository::{LanguageCatalogCache, LanguageRepositoryImpl, UserRepositoryImpl};
