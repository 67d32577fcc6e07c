//! LRU caches for resolved player and team names

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tokio::sync::RwLock;
use tracing::debug;

use super::names::NameLookup;

/// One LRU cache per lookup table, keyed by api id
#[derive(Debug)]
pub struct NameCache {
    players: RwLock<LruCache<i64, String>>,
    teams: RwLock<LruCache<i64, String>>,
}

impl NameCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            players: RwLock::new(LruCache::new(capacity)),
            teams: RwLock::new(LruCache::new(capacity)),
        }
    }

    fn cache_for(&self, lookup: NameLookup) -> &RwLock<LruCache<i64, String>> {
        match lookup {
            NameLookup::Player => &self.players,
            NameLookup::Team => &self.teams,
        }
    }

    /// Splits `ids` into names already cached and ids that still need a query.
    /// Hits are moved to the front of the LRU order.
    pub async fn partition(&self, lookup: NameLookup, ids: &[i64]) -> (HashMap<i64, String>, Vec<i64>) {
        let mut cache = self.cache_for(lookup).write().await;
        let mut found = HashMap::new();
        let mut missing = Vec::new();

        for &id in ids {
            match cache.get(&id) {
                Some(name) => {
                    found.insert(id, name.clone());
                }
                None => missing.push(id),
            }
        }

        debug!(
            "{lookup:?} name cache: {} hits, {} misses",
            found.len(),
            missing.len()
        );
        (found, missing)
    }

    pub async fn insert_all(&self, lookup: NameLookup, names: &HashMap<i64, String>) {
        let mut cache = self.cache_for(lookup).write().await;
        for (id, name) in names {
            cache.put(*id, name.clone());
        }
    }

    pub async fn len(&self, lookup: NameLookup) -> usize {
        self.cache_for(lookup).read().await.len()
    }

    pub async fn clear(&self) {
        self.players.write().await.clear();
        self.teams.write().await.clear();
    }
}
