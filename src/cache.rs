//! Process-wide cache store for artifacts produced by seeders.
//!
//! Values are serialized to JSON and kept in a bounded LRU with an absolute
//! expiry per entry. Expired entries are dropped lazily on read.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

const DEFAULT_CAPACITY: usize = 256;

/// Errors raised by the cache store
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to serialize cache entry '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to deserialize cache entry '{key}': {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: String,
    expires_at: DateTime<Utc>,
}

/// Bounded key/value store with per-entry time-to-live
#[derive(Debug)]
pub struct CacheStore {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl CacheStore {
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the process-wide store shared by seeders and lookup helpers.
    pub fn global() -> Arc<CacheStore> {
        static GLOBAL: OnceLock<Arc<CacheStore>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(CacheStore::new(DEFAULT_CAPACITY)))
            .clone()
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub fn put<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> Result<(), CacheError> {
        let payload = serde_json::to_string(value).map_err(|source| CacheError::Serialize {
            key: key.to_string(),
            source,
        })?;
        let entry = CacheEntry {
            payload,
            expires_at: Utc::now() + ttl,
        };
        self.lock().put(key.to_string(), entry);
        Ok(())
    }

    /// Reads the entry under `key`, or `None` if it is absent or expired.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        self.get_at(key, Utc::now())
    }

    fn get_at<T: DeserializeOwned>(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<T>, CacheError> {
        let payload = {
            let mut entries = self.lock();
            let expired = match entries.peek(key) {
                Some(entry) => entry.expires_at <= now,
                None => return Ok(None),
            };
            if expired {
                entries.pop(key);
                return Ok(None);
            }
            match entries.get(key) {
                Some(entry) => entry.payload.clone(),
                None => return Ok(None),
            }
        };

        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|source| CacheError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Returns the cached value under `key`, or builds, stores and returns it
    /// when the entry is absent or expired.
    pub fn remember<T, F>(&self, key: &str, ttl: Duration, build: F) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get(key)? {
            return Ok(value);
        }
        let value = build();
        self.put(key, &value, ttl)?;
        Ok(value)
    }

    /// Returns when the entry under `key` expires, if it is present.
    pub fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.lock().peek(key).map(|entry| entry.expires_at)
    }

    /// Removes the entry under `key`. Returns true if one was present.
    pub fn forget(&self, key: &str) -> bool {
        self.lock().pop(key).is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_back_values() {
        let cache = CacheStore::new(4);
        cache
            .put("answer", &vec![1, 2, 3], Duration::minutes(5))
            .unwrap();

        let value: Option<Vec<i32>> = cache.get("answer").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn expired_entries_are_evicted_on_read() {
        let cache = CacheStore::new(4);
        cache.put("stale", &"value", Duration::days(30)).unwrap();

        let later = Utc::now() + Duration::days(31);
        let value: Option<String> = cache.get_at("stale", later).unwrap();
        assert!(value.is_none());
        assert!(cache.expires_at("stale").is_none());
    }

    #[test]
    fn capacity_bounds_the_store() {
        let cache = CacheStore::new(2);
        cache.put("a", &1, Duration::minutes(1)).unwrap();
        cache.put("b", &2, Duration::minutes(1)).unwrap();
        cache.put("c", &3, Duration::minutes(1)).unwrap();

        assert!(cache.get::<i32>("a").unwrap().is_none());
        assert_eq!(cache.get::<i32>("c").unwrap(), Some(3));
    }

    #[test]
    fn remember_builds_once_until_expiry() {
        let cache = CacheStore::new(4);
        let mut builds = 0;

        let first: u32 = cache
            .remember("counter", Duration::minutes(1), || {
                builds += 1;
                7
            })
            .unwrap();
        let second: u32 = cache
            .remember("counter", Duration::minutes(1), || {
                builds += 1;
                8
            })
            .unwrap();

        assert_eq!((first, second), (7, 7));
        assert_eq!(builds, 1);
    }

    #[test]
    fn forget_removes_entry() {
        let cache = CacheStore::default();
        cache.put("k", &true, Duration::minutes(1)).unwrap();
        assert!(cache.forget("k"));
        assert!(!cache.forget("k"));
    }

    #[test]
    fn type_mismatch_is_reported() {
        let cache = CacheStore::default();
        cache.put("k", &"text", Duration::minutes(1)).unwrap();
        let result: Result<Option<u32>, _> = cache.get("k");
        assert!(matches!(result, Err(CacheError::Deserialize { .. })));
    }
}
