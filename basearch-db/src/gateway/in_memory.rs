//! InMemoryStore - HashMap-backed store gateway for tests and development.

use async_trait::async_trait;
use basearch_api::StoreError;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use super::record::{Constraint, Record};
use super::store_gateway::StoreGateway;
use crate::models::entity::Entity;
use crate::models::table::EntityTable;

#[derive(Default)]
struct Counters {
    fetches: AtomicUsize,
    queries: AtomicUsize,
    updates: AtomicUsize,
}

/// In-memory store keyed by table name, then id.
///
/// Clone-friendly via Arc: clones share rows, counters and the availability switch.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<&'static str, BTreeMap<Uuid, Record>>>>,
    counters: Arc<Counters>,
    unavailable: Arc<AtomicBool>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            counters: Arc::new(Counters::default()),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seeds a row directly, bypassing the gateway contract.
    pub fn insert<E: Entity>(&self, entity: &E) {
        let record = entity.to_record();
        self.tables
            .write()
            .entry(E::table().name)
            .or_default()
            .insert(record.id(), record);
    }

    /// Removes every row of the entity's table.
    pub fn clear<E: Entity>(&self) {
        self.tables.write().remove(E::table().name);
    }

    /// Simulates a lost connection: every gateway call fails while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.counters.fetches.load(Ordering::SeqCst)
    }

    pub fn query_count(&self) -> usize {
        self.counters.queries.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.counters.updates.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("in-memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StoreGateway for InMemoryStore {
    async fn fetch_by_id(&self, table: &'static EntityTable, id: Uuid) -> Result<Option<Record>, StoreError> {
        self.counters.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let tables = self.tables.read();
        Ok(tables.get(table.name).and_then(|rows| rows.get(&id)).cloned())
    }

    async fn query(
        &self,
        table: &'static EntityTable,
        constraints: &[Constraint],
    ) -> Result<Vec<Record>, StoreError> {
        self.counters.queries.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        if let Some(unknown) = constraints.iter().find(|c| table.column(c.column).is_none()) {
            return Err(StoreError::UnknownColumn {
                table: table.name,
                column: unknown.column,
            });
        }

        let tables = self.tables.read();
        let results = tables
            .get(table.name)
            .map(|rows| {
                rows.values()
                    .filter(|record| record.matches(constraints))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(results)
    }

    async fn update(&self, table: &'static EntityTable, record: &Record) -> Result<(), StoreError> {
        self.counters.updates.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut tables = self.tables.write();
        let row = tables
            .get_mut(table.name)
            .and_then(|rows| rows.get_mut(&record.id()))
            .ok_or_else(|| StoreError::MissingRow {
                table: table.name,
                id: record.id().to_string(),
            })?;
        *row = record.clone();
        Ok(())
    }
}
