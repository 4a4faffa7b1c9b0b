//! Query cache implementation using the moka crate.

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use docex_core::result::AppResult;

/// Entries are few (one folder listing plus one file listing per visited
/// folder), so the cap exists only as a safety net.
const MAX_ENTRIES: u64 = 1024;

/// In-process cache of the last fetched result per query key.
///
/// Values are stored as JSON strings. Entries have no TTL: a cached
/// listing stays valid until a mutation invalidates its key.
#[derive(Debug, Clone)]
pub struct QueryCache {
    /// The underlying moka cache.
    cache: Cache<String, String>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    /// Create an empty query cache.
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(MAX_ENTRIES).build(),
        }
    }

    /// Get a typed value by deserializing the cached JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.cache.get(key).await {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Store a typed value as JSON under the key.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.cache.insert(key.to_string(), json).await;
        Ok(())
    }

    /// Mark a query stale by dropping its cached result. The next
    /// [`QueryCache::get_or_fetch`] for the key re-fetches.
    pub async fn invalidate(&self, key: &str) {
        debug!(key, "invalidating cached query");
        self.cache.remove(key).await;
    }

    /// Read-through helper: return the cached value, or run `fetch`,
    /// cache its result, and return it.
    ///
    /// A failed fetch caches nothing, so the next read retries.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        if let Some(cached) = self.get_json(key).await? {
            return Ok(cached);
        }

        let fresh = fetch().await?;
        self.put_json(key, &fresh).await?;
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let cache = QueryCache::new();
        cache.put_json("k", &vec![1, 2, 3]).await.unwrap();
        let got: Option<Vec<i32>> = cache.get_json("k").await.unwrap();
        assert_eq!(got, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_get_or_fetch_hits_cache_on_second_read() {
        let cache = QueryCache::new();
        let calls = AtomicU32::new(0);

        for _ in 0..2 {
            let value: Vec<String> = cache
                .get_or_fetch("q", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec!["a".to_string()])
                })
                .await
                .unwrap();
            assert_eq!(value, vec!["a".to_string()]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryCache::new();
        let calls = AtomicU32::new(0);
        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(42u64)
        };

        let _: u64 = cache.get_or_fetch("q", fetch).await.unwrap();
        cache.invalidate("q").await;
        let _: u64 = cache.get_or_fetch("q", fetch).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let cache = QueryCache::new();
        let calls = AtomicU32::new(0);

        let first: AppResult<u64> = cache
            .get_or_fetch("q", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(docex_core::AppError::external_service("down"))
            })
            .await;
        assert!(first.is_err());

        let second: u64 = cache
            .get_or_fetch("q", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(9)
            })
            .await
            .unwrap();
        assert_eq!(second, 9);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
