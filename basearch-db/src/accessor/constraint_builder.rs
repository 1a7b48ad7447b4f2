use basearch_api::{AccessError, AccessResult};

use super::entity_accessor::EntityAccessor;
use crate::gateway::Constraint;
use crate::models::attribute::{Attribute, AttributeValue};
use crate::models::entity::Entity;
use crate::models::table::EntityTable;

/// A conjunction ready for the store: one entry per column, sorted by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    table: &'static EntityTable,
    constraints: Vec<Constraint>,
}

impl CompiledQuery {
    pub fn table(&self) -> &'static EntityTable {
        self.table
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Accumulates equality constraints for one lookup.
///
/// Each builder is owned by a single call chain; `and` consumes and returns it.
/// Problems with a named attribute are remembered and reported by [`Self::compile`],
/// so a malformed lookup never reaches the store.
#[must_use = "a constraint builder does nothing until `find` is awaited"]
pub struct ConstraintBuilder<'a, E: Entity> {
    accessor: &'a EntityAccessor<E>,
    constraints: Vec<(E::Attribute, AttributeValue)>,
    rejected: Option<String>,
}

impl<'a, E: Entity> ConstraintBuilder<'a, E> {
    pub(super) fn new(accessor: &'a EntityAccessor<E>) -> Self {
        Self {
            accessor,
            constraints: Vec::new(),
            rejected: None,
        }
    }

    pub fn and(mut self, attribute: E::Attribute, value: impl Into<AttributeValue>) -> Self {
        self.constraints.push((attribute, value.into()));
        self
    }

    pub fn and_named(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        match E::Attribute::from_name(name) {
            Some(attribute) => self.and(attribute, value),
            None => {
                if self.rejected.is_none() {
                    self.rejected = Some(if name.is_empty() {
                        "attribute name must not be empty".to_string()
                    } else {
                        format!("unknown attribute '{}' for {}", name, E::table().name)
                    });
                }
                self
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.rejected.is_none()
    }

    /// Validates the conjunction and resolves attributes to columns.
    ///
    /// A repeated attribute keeps its last value.
    pub fn compile(&self) -> AccessResult<CompiledQuery> {
        if let Some(message) = &self.rejected {
            return Err(AccessError::InvalidArgument(message.clone()));
        }
        if self.constraints.is_empty() {
            return Err(AccessError::invalid_argument(format!(
                "a lookup on {} needs at least one constraint",
                E::table().name
            )));
        }

        let mut constraints: Vec<Constraint> = Vec::with_capacity(self.constraints.len());
        for (attribute, value) in &self.constraints {
            if value.kind() != attribute.kind() {
                return Err(AccessError::invalid_argument(format!(
                    "attribute '{}' of {} expects {:?}, got {:?}",
                    attribute.name(),
                    E::table().name,
                    attribute.kind(),
                    value.kind()
                )));
            }

            let column = attribute.column().name;
            match constraints.iter_mut().find(|c| c.column == column) {
                Some(existing) => existing.value = value.clone(),
                None => constraints.push(Constraint::new(column, value.clone())),
            }
        }
        constraints.sort_by(|a, b| a.column.cmp(b.column));

        Ok(CompiledQuery {
            table: E::table(),
            constraints,
        })
    }

    /// Executes the lookup, expecting at most one match
    ///
    /// # Returns
    /// * `Ok(Some(E))` - Exactly one entity matched
    /// * `Ok(None)` - Nothing matched
    /// * `Err(AccessError::AmbiguousResult)` - Two or more entities matched
    /// * `Err(AccessError::InvalidArgument)` - The conjunction is empty or malformed
    pub async fn find(self) -> AccessResult<Option<E>> {
        let query = self.compile()?;
        let mut matches = self.accessor.execute(&query).await?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(AccessError::AmbiguousResult {
                entity: E::table().name,
                matches: n,
            }),
        }
    }

    /// Executes the lookup and returns every match.
    pub async fn find_all(self) -> AccessResult<Vec<E>> {
        let query = self.compile()?;
        self.accessor.execute(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryStore;
    use crate::models::language::{LanguageAttribute, LanguageModel};
    use crate::models::user::{UserAttribute, UserModel};
    use crate::test_helper::seeded_store;
    use std::sync::Arc;

    fn languages(store: &InMemoryStore) -> EntityAccessor<LanguageModel> {
        EntityAccessor::new(Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn test_single_match() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = seeded_store();
        let found = languages(&store)
            .with(LanguageAttribute::LangCode, "es")
            .and(LanguageAttribute::RegionCode, "ES")
            .find()
            .await?
            .expect("es-ES is seeded");
        assert_eq!(found.to_locale()?.to_tag(), "es-ES");
        assert_eq!(store.query_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_is_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = seeded_store();
        let found = languages(&store)
            .with(LanguageAttribute::LangCode, "bla")
            .and(LanguageAttribute::RegionCode, "bla")
            .and(LanguageAttribute::VariantCode, "bla")
            .find()
            .await?;
        assert!(found.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_many_matches_is_ambiguous() {
        let store = seeded_store();
        let err = languages(&store)
            .with(LanguageAttribute::LangCode, "en")
            .find()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccessError::AmbiguousResult {
                entity: "languages",
                matches: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_find_all_returns_every_match() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = seeded_store();
        let english = languages(&store)
            .with(LanguageAttribute::LangCode, "en")
            .find_all()
            .await?;
        assert_eq!(english.len(), 2);
        assert!(english.iter().all(|l| l.lang_code.as_str() == "en"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_conjunction_never_queries() {
        let store = seeded_store();
        let accessor = languages(&store);

        let err = accessor.constraints().find().await.unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(accessor.constraints().find_all().await.unwrap_err().is_invalid_argument());
        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_attribute_name_never_queries() {
        let store = seeded_store();
        let accessor = languages(&store);

        let err = accessor
            .with(LanguageAttribute::LangCode, "es")
            .and_named("colour", "blue")
            .find()
            .await
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidArgument(ref m) if m.contains("colour")));

        let err = accessor.with_named("", "es").find().await.unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_value_kind_mismatch_is_invalid() {
        let store = seeded_store();
        let err = languages(&store)
            .with(LanguageAttribute::IsDefault, "yes")
            .find()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(store.query_count(), 0);
    }

    #[tokio::test]
    async fn test_named_attributes_resolve() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = seeded_store();
        let default = languages(&store)
            .with_named("is_default", true)
            .find()
            .await?
            .expect("one default is seeded");
        assert_eq!(default.to_locale()?.to_tag(), "en-US");

        let users: EntityAccessor<UserModel> = EntityAccessor::new(Arc::new(store.clone()));
        let maria = users.with_named("username", "maria").find().await?;
        assert!(maria.is_some());
        Ok(())
    }

    #[test]
    fn test_compile_is_order_independent() {
        let store = InMemoryStore::new();
        let accessor = languages(&store);

        let forward = accessor
            .with(LanguageAttribute::LangCode, "es")
            .and(LanguageAttribute::RegionCode, "ES")
            .compile()
            .unwrap();
        let backward = accessor
            .with(LanguageAttribute::RegionCode, "ES")
            .and(LanguageAttribute::LangCode, "es")
            .compile()
            .unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.constraints().len(), 2);
    }

    #[test]
    fn test_repeated_attribute_keeps_last_value() {
        let store = InMemoryStore::new();
        let users: EntityAccessor<UserModel> = EntityAccessor::new(Arc::new(store));

        let query = users
            .with(UserAttribute::Username, "first")
            .and(UserAttribute::Username, "second")
            .compile()
            .unwrap();
        assert_eq!(query.constraints(), &[Constraint::new("username", "second".into())]);
    }
}
