//! Fluent entity accessor.
//!
//! ```ignore
//! let store = EntityStore::new(gateway);
//! let spanish = store
//!     .entity::<LanguageModel>()
//!     .with(LanguageAttribute::LangCode, "es")
//!     .and(LanguageAttribute::RegionCode, "ES")
//!     .find()
//!     .await?;
//! ```

mod constraint_builder;
mod entity_accessor;

pub use constraint_builder::{CompiledQuery, ConstraintBuilder};
pub use entity_accessor::EntityAccessor;

use std::sync::Arc;

use crate::gateway::StoreGateway;
use crate::models::entity::Entity;

/// Entry point handing out accessors that share one gateway.
#[derive(Clone)]
pub struct EntityStore {
    gateway: Arc<dyn StoreGateway>,
}

impl EntityStore {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self { gateway }
    }

    pub fn entity<E: Entity>(&self) -> EntityAccessor<E> {
        EntityAccessor::new(self.gateway.clone())
    }

    pub fn gateway(&self) -> &Arc<dyn StoreGateway> {
        &self.gateway
    }
}
