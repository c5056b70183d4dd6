//! Bounded LRU memoization of fetch-and-normalize results.

use metrics::counter;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Default capacity of the exoplanet catalog cache (distinct `limit` values).
pub const EXOPLANET_CACHE_CAPACITY: usize = 32;
/// Default capacity of single-valued feed caches.
pub const FEED_CACHE_CAPACITY: usize = 4;

struct Slot<V> {
    cell: Arc<OnceCell<V>>,
    last_used: u64,
}

struct LruIndex<K, V> {
    slots: HashMap<K, Slot<V>>,
    tick: u64,
}

/// In-process cache keyed by a request parameter.
///
/// - Holds at most `capacity` keys; inserting past capacity evicts the
///   least-recently-used key. Hits refresh recency.
/// - Concurrent misses on one key share a single computation; the other
///   callers wait for its result.
/// - Failed computations are not stored.
/// - Keys whose computation is still running are never evicted.
/// - Values are cloned out, so `V` is typically an `Arc`.
///
/// There is no invalidation API and no expiry.
pub struct ResultCache<K, V> {
    name: &'static str,
    capacity: usize,
    index: Mutex<LruIndex<K, V>>,
}

impl<K, V> ResultCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    /// Creates an empty cache. A capacity of zero is raised to one.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity: capacity.max(1),
            index: Mutex::new(LruIndex {
                slots: HashMap::new(),
                tick: 0,
            }),
        }
    }

    /// Returns the cached value for `key`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error of `compute`; nothing is cached in that case.
    pub async fn get_or_compute<F, Fut, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = self.slot_for(&key);

        if let Some(value) = cell.get() {
            counter!("result_cache_hits_total", "cache" => self.name).increment(1);
            debug!(cache = self.name, key = ?key, "Cache HIT");
            return Ok(value.clone());
        }

        let result = cell
            .get_or_try_init(|| {
                counter!("result_cache_misses_total", "cache" => self.name).increment(1);
                debug!(cache = self.name, key = ?key, "Cache MISS");
                compute()
            })
            .await
            .cloned();

        if result.is_err() {
            self.discard_if_empty(&key, &cell);
        }

        result
    }

    /// Returns the cached value without computing. A hit refreshes recency.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut index = self.index.lock();
        index.tick += 1;
        let tick = index.tick;
        let slot = index.slots.get_mut(key)?;
        let value = slot.cell.get()?.clone();
        slot.last_used = tick;
        Some(value)
    }

    /// Returns true if a completed value is stored for `key`. Does not affect recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index
            .lock()
            .slots
            .get(key)
            .is_some_and(|slot| slot.cell.initialized())
    }

    /// Number of keys currently held, including in-flight computations.
    pub fn len(&self) -> usize {
        self.index.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Finds or creates the slot for `key`, marks it used and evicts if over capacity.
    fn slot_for(&self, key: &K) -> Arc<OnceCell<V>> {
        let mut index = self.index.lock();
        index.tick += 1;
        let tick = index.tick;

        if let Some(slot) = index.slots.get_mut(key) {
            slot.last_used = tick;
            return slot.cell.clone();
        }

        // In-flight slots are never evicted; the index may briefly exceed
        // capacity while every slot is still computing.
        while index.slots.len() >= self.capacity {
            let victim = index
                .slots
                .iter()
                .filter(|(_, slot)| slot.cell.initialized())
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(k, _)| k.clone());
            let Some(victim) = victim else { break };
            index.slots.remove(&victim);
            counter!("result_cache_evictions_total", "cache" => self.name).increment(1);
            debug!(cache = self.name, key = ?victim, "Cache EVICT");
        }

        let cell = Arc::new(OnceCell::new());
        index.slots.insert(
            key.clone(),
            Slot {
                cell: cell.clone(),
                last_used: tick,
            },
        );
        cell
    }

    /// Drops the slot for `key` if it is still the given, uninitialized cell.
    fn discard_if_empty(&self, key: &K, cell: &Arc<OnceCell<V>>) {
        let mut index = self.index.lock();
        let stale = index
            .slots
            .get(key)
            .is_some_and(|slot| Arc::ptr_eq(&slot.cell, cell) && !slot.cell.initialized());
        if stale {
            index.slots.remove(key);
        }
    }
}
