use crate::QueryConfig;
use composable_state_runtime::retry::retry_with_predicate;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// A cached query result.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
    invalidated: bool,
}

/// Entries plus invalidation counters.
///
/// A key's generation is `epoch + marks[key]`. Both only grow, so a fetch
/// that saw generation `g` knows it was invalidated mid-flight if the
/// generation differs when it completes. Marks exist for keys that have no
/// entry yet.
struct Cache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    marks: HashMap<K, u64>,
    epoch: u64,
}

impl<K: Eq + Hash, V> Cache<K, V> {
    fn generation(&self, key: &K) -> u64 {
        self.epoch + self.marks.get(key).copied().unwrap_or(0)
    }

    fn mark(&mut self, key: K) {
        *self.marks.entry(key).or_insert(0) += 1;
    }
}

/// Keyed cache of async query results.
///
/// Cloning is cheap; all clones share one cache.
pub struct QueryClient<K, V> {
    cache: Arc<RwLock<Cache<K, V>>>,
    config: QueryConfig,
}

impl<K, V> Clone for QueryClient<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            config: self.config.clone(),
        }
    }
}

impl<K, V> fmt::Debug for QueryClient<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for QueryClient<K, V> {
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}

impl<K, V> QueryClient<K, V> {
    /// Create an empty client.
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self {
            cache: Arc::new(RwLock::new(Cache {
                entries: HashMap::new(),
                marks: HashMap::new(),
                epoch: 0,
            })),
            config,
        }
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }
}

impl<K, V> QueryClient<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    /// Return the cached value for `key` if fresh, otherwise run `fetcher`.
    ///
    /// Every error is retried up to [`QueryConfig::retry`] times. If `key` is
    /// invalidated or removed while the fetcher runs, the result is still
    /// returned and cached, but already stale.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's last error once retries are exhausted. Nothing
    /// is cached on failure.
    pub async fn fetch<F, Fut, E>(&self, key: K, fetcher: F) -> Result<V, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: fmt::Display,
    {
        self.fetch_if(key, fetcher, |_| true).await
    }

    /// Like [`QueryClient::fetch`], but only retries errors `should_retry` accepts.
    ///
    /// # Errors
    ///
    /// Returns the first error `should_retry` rejects, or the last error once
    /// retries are exhausted.
    pub async fn fetch_if<F, Fut, E, P>(&self, key: K, fetcher: F, should_retry: P) -> Result<V, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: fmt::Display,
        P: Fn(&E) -> bool,
    {
        let started_at = {
            let cache = self.cache.read().await;
            if let Some(value) = self.fresh_in(&cache, &key) {
                metrics::counter!("query.cache.hits").increment(1);
                tracing::trace!(?key, "Query served from cache");
                return Ok(value);
            }
            cache.generation(&key)
        };

        metrics::counter!("query.cache.misses").increment(1);
        tracing::debug!(?key, "Fetching query");

        match retry_with_predicate(self.config.retry_policy(), fetcher, should_retry).await {
            Ok(value) => {
                let mut cache = self.cache.write().await;
                let invalidated = cache.generation(&key) != started_at;
                if invalidated {
                    tracing::debug!(?key, "Query invalidated while fetching, cached as stale");
                }
                cache.entries.insert(
                    key,
                    CacheEntry {
                        value: value.clone(),
                        fetched_at: Instant::now(),
                        invalidated,
                    },
                );
                Ok(value)
            },
            Err(error) => {
                metrics::counter!("query.fetch.failures").increment(1);
                tracing::warn!(?key, %error, "Query failed");
                Err(error)
            },
        }
    }

    /// Cached value for `key`, fresh or not.
    pub async fn get_query_data(&self, key: &K) -> Option<V> {
        self.cache.read().await.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store `value` under `key` as freshly fetched.
    pub async fn set_query_data(&self, key: K, value: V) {
        self.cache.write().await.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    /// Apply `update` to the cached value for `key`, if any, keeping its age.
    pub async fn update_query_data(&self, key: &K, update: impl FnOnce(&mut V)) {
        if let Some(entry) = self.cache.write().await.entries.get_mut(key) {
            update(&mut entry.value);
        }
    }

    /// Drop the cached value for `key`.
    ///
    /// A fetch of `key` already in flight will cache its result as stale.
    pub async fn remove_query(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.write().await;
        cache.mark(key.clone());
        cache.entries.remove(key).map(|entry| entry.value)
    }

    /// Mark `key` stale so the next fetch goes to the source.
    ///
    /// The cached value stays readable through [`QueryClient::get_query_data`].
    /// Also applies to a fetch of `key` already in flight, even when nothing
    /// is cached yet.
    pub async fn invalidate(&self, key: &K) {
        let mut cache = self.cache.write().await;
        cache.mark(key.clone());
        if let Some(entry) = cache.entries.get_mut(key) {
            entry.invalidated = true;
        }
        tracing::debug!(?key, "Query invalidated");
    }

    /// Mark every key stale, including fetches in flight.
    pub async fn invalidate_all(&self) {
        let mut cache = self.cache.write().await;
        cache.epoch += 1;
        for entry in cache.entries.values_mut() {
            entry.invalidated = true;
        }
        tracing::debug!(count = cache.entries.len(), "All queries invalidated");
    }

    /// Whether the next fetch of `key` would go to the source.
    pub async fn is_stale(&self, key: &K) -> bool {
        let cache = self.cache.read().await;
        self.fresh_in(&cache, key).is_none()
    }

    /// Signal that the application regained focus.
    ///
    /// Invalidates everything when `refetch_on_window_focus` is enabled,
    /// otherwise does nothing.
    pub async fn window_focused(&self) {
        if self.config.refetch_on_window_focus {
            self.invalidate_all().await;
        }
    }

    fn fresh_in(&self, cache: &Cache<K, V>, key: &K) -> Option<V> {
        let entry = cache.entries.get(key)?;
        let fresh = !entry.invalidated && entry.fetched_at.elapsed() < self.config.stale_time;
        fresh.then(|| entry.value.clone())
    }
}
