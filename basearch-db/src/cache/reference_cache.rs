//! Snapshot cache for small, read-only reference catalogs.
//!
//! Readers clone an `Arc` to the current [`CatalogSnapshot`] and never see it change.
//! Every write builds a new snapshot and swaps it in under the write lock. Lazy fills
//! carry the generation they were read under and are dropped if a reload or
//! invalidation happened in between.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Immutable view of the cached catalog at one generation.
#[derive(Debug)]
pub struct CatalogSnapshot<K, T> {
    generation: u64,
    all: Option<Arc<Vec<T>>>,
    default: Option<T>,
    keyed: HashMap<K, T>,
}

impl<K: Eq + Hash, T> CatalogSnapshot<K, T> {
    fn empty(generation: u64) -> Self {
        Self {
            generation,
            all: None,
            default: None,
            keyed: HashMap::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn all(&self) -> Option<Arc<Vec<T>>> {
        self.all.clone()
    }

    pub fn default_entry(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.keyed.get(key)
    }

    pub fn keyed_len(&self) -> usize {
        self.keyed.len()
    }
}

impl<K: Clone, T: Clone> CatalogSnapshot<K, T> {
    fn next_copy(&self) -> Self {
        Self {
            generation: self.generation,
            all: self.all.clone(),
            default: self.default.clone(),
            keyed: self.keyed.clone(),
        }
    }
}

pub struct ReferenceCache<K, T> {
    capacity: usize,
    current: RwLock<Arc<CatalogSnapshot<K, T>>>,
    generations: AtomicU64,
}

impl<K, T> ReferenceCache<K, T>
where
    K: Clone + Eq + Hash,
    T: Clone,
{
    /// `capacity` bounds the keyed entries; the full list and default are always kept.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            current: RwLock::new(Arc::new(CatalogSnapshot::empty(0))),
            generations: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot<K, T>> {
        self.current.read().clone()
    }

    /// Installs the full list if `generation` is still current; returns the list to use.
    pub fn fill_all(&self, generation: u64, all: Vec<T>) -> Arc<Vec<T>> {
        let all = Arc::new(all);
        self.modify(generation, |snapshot| {
            if snapshot.all.is_none() {
                snapshot.all = Some(all.clone());
            }
        });
        all
    }

    pub fn fill_default(&self, generation: u64, default: T) {
        self.modify(generation, |snapshot| {
            if snapshot.default.is_none() {
                snapshot.default = Some(default);
            }
        });
    }

    /// Adds a keyed entry; skipped when the cache is full or the generation moved on.
    pub fn insert_keyed(&self, generation: u64, key: K, value: T) -> bool {
        let capacity = self.capacity;
        self.modify(generation, |snapshot| {
            if snapshot.keyed.contains_key(&key) || snapshot.keyed.len() < capacity {
                snapshot.keyed.insert(key, value);
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
    }

    /// Swaps in a fully populated snapshot and returns its generation.
    pub fn replace(&self, all: Vec<T>, default: Option<T>) -> u64 {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = CatalogSnapshot {
            generation,
            all: Some(Arc::new(all)),
            default,
            keyed: HashMap::new(),
        };
        *self.current.write() = Arc::new(snapshot);
        generation
    }

    /// Swaps in an empty snapshot; the next read repopulates it.
    pub fn invalidate(&self) -> u64 {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.write() = Arc::new(CatalogSnapshot::empty(generation));
        generation
    }

    fn modify<R>(&self, generation: u64, change: impl FnOnce(&mut CatalogSnapshot<K, T>) -> R) -> Option<R> {
        let mut current = self.current.write();
        if current.generation != generation {
            return None;
        }
        let mut next = current.next_copy();
        let result = change(&mut next);
        *current = Arc::new(next);
        Some(result)
    }
}
