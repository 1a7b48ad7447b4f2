use basearch_api::{AccessError, AccessResult};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use super::constraint_builder::{CompiledQuery, ConstraintBuilder};
use crate::gateway::StoreGateway;
use crate::models::attribute::AttributeValue;
use crate::models::entity::Entity;

/// Typed access to one entity type through a [`StoreGateway`].
pub struct EntityAccessor<E: Entity> {
    gateway: Arc<dyn StoreGateway>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for EntityAccessor<E> {
    fn clone(&self) -> Self {
        Self::new(self.gateway.clone())
    }
}

impl<E: Entity> EntityAccessor<E> {
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self {
            gateway,
            _entity: PhantomData,
        }
    }

    /// Fetches the entity with the given identifier
    ///
    /// # Returns
    /// * `Ok(Some(E))` - The entity
    /// * `Ok(None)` - If no entity has that identifier
    /// * `Err(AccessError::InvalidArgument)` - For the nil UUID, without touching the store
    pub async fn by_id(&self, id: Uuid) -> AccessResult<Option<E>> {
        if id.is_nil() {
            return Err(AccessError::invalid_argument(format!(
                "{} id must not be nil",
                E::table().name
            )));
        }

        let record = self.gateway.fetch_by_id(E::table(), id).await?;
        Ok(record.map(E::from_record).transpose()?)
    }

    /// Starts an empty conjunction, for callers that add constraints conditionally.
    pub fn constraints(&self) -> ConstraintBuilder<'_, E> {
        ConstraintBuilder::new(self)
    }

    pub fn with(&self, attribute: E::Attribute, value: impl Into<AttributeValue>) -> ConstraintBuilder<'_, E> {
        self.constraints().and(attribute, value)
    }

    /// Like [`Self::with`], resolving the attribute by its registered name.
    pub fn with_named(&self, name: &str, value: impl Into<AttributeValue>) -> ConstraintBuilder<'_, E> {
        self.constraints().and_named(name, value)
    }

    /// Every entity of the type, in the type's natural order.
    ///
    /// Meant for small reference and admin listings; there is no paging.
    pub async fn list_all(&self) -> AccessResult<Vec<E>> {
        let records = self.gateway.query(E::table(), &[]).await?;
        let mut entities = records
            .into_iter()
            .map(E::from_record)
            .collect::<Result<Vec<E>, _>>()?;
        entities.sort_by(|a, b| a.natural_order(b));
        Ok(entities)
    }

    /// Overwrites the stored entity with the given values.
    pub async fn update(&self, entity: &E) -> AccessResult<()> {
        if entity.get_id().is_nil() {
            return Err(AccessError::invalid_argument(format!(
                "cannot update {} with a nil id",
                E::table().name
            )));
        }

        tracing::debug!(table = E::table().name, id = %entity.get_id(), "updating entity");
        self.gateway.update(E::table(), &entity.to_record()).await?;
        Ok(())
    }

    pub(super) async fn execute(&self, query: &CompiledQuery) -> AccessResult<Vec<E>> {
        tracing::debug!(
            table = query.table().name,
            constraints = query.constraints().len(),
            "executing conjunctive lookup"
        );
        let records = self.gateway.query(query.table(), query.constraints()).await?;
        let entities = records
            .into_iter()
            .map(E::from_record)
            .collect::<Result<Vec<E>, _>>()?;
        Ok(entities)
    }
}
