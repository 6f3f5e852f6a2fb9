use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::trace;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

/// In-memory memoization of secondary lookups, with an optional time-to-live.
///
/// The lock is never held while fetching: concurrent misses on the same key
/// both fetch, the last write wins. Clones share the same entries.
#[derive(Debug)]
pub struct IdentityCache<K, V> {
    entries: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    ttl: Option<Duration>,
}

impl<K, V> Default for IdentityCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: None,
        }
    }
}

impl<K, V> Clone for IdentityCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            ttl: self.ttl,
        }
    }
}

impl<K, V> IdentityCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: Some(ttl),
        }
    }

    /// A cache whose entries never go stale.
    pub fn without_expiry() -> Self {
        Self::default()
    }

    fn is_expired(&self, entry: &CacheEntry<V>) -> bool {
        self.ttl.is_some_and(|ttl| entry.fetched_at.elapsed() > ttl)
    }

    /// The cached value, `None` when absent or stale. A stale entry is evicted.
    pub async fn get(&self, key: &K) -> Option<V> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !self.is_expired(entry) => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        // Another task may have refreshed it in between
        match entries.get(key) {
            Some(entry) if !self.is_expired(entry) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                trace!(?key, "[CACHE] evicted");
                None
            }
            None => None,
        }
    }

    /// Stores a value, dropping every stale entry on the way.
    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        if self.ttl.is_some() {
            entries.retain(|_, entry| !self.is_expired(entry));
        }
        entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Amount of stored entries, stale ones not yet evicted included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// The cached value, or the result of `fetch` stored for later calls.
    ///
    /// Neither errors nor `None` results are stored, the next call fetches again.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<Option<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<V>, E>>,
    {
        if let Some(value) = self.get(&key).await {
            trace!(?key, "[CACHE] hit");
            return Ok(Some(value));
        }

        trace!(?key, "[CACHE] miss");
        let fetched = fetch().await?;
        if let Some(value) = &fetched {
            self.insert(key, value.clone()).await;
        }

        Ok(fetched)
    }
}
