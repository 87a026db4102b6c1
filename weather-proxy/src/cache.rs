//! Memoizing lookup cache shared by the airport directory and the
//! winds-aloft coordinate resolver.
//!
//! Entries are never evicted or refreshed: once a key has been resolved it
//! stays resolved for the life of the process. A key can resolve to a value
//! or to [`Resolved::Absent`], which records "looked up, nothing there" so
//! that failed lookups are not repeated.
//!
//! Concurrent first lookups of the same key may each run the fetch; the
//! last write wins. Callers only store idempotent data, so no extra locking
//! is done around population.

use std::future::Future;
use std::hash::Hash;

use moka::future::Cache as MokaCache;
use tracing::trace;

/// Outcome of a completed lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<V> {
    /// The lookup produced a value.
    Found(V),
    /// The lookup completed and there was nothing to find.
    Absent,
}

impl<V> Resolved<V> {
    /// Convert into an `Option`, discarding the absent marker.
    pub fn found(self) -> Option<V> {
        match self {
            Resolved::Found(v) => Some(v),
            Resolved::Absent => None,
        }
    }
}

/// Process-lifetime memo of `K -> Resolved<V>`.
pub struct MemoCache<K, V> {
    entries: MokaCache<K, Resolved<V>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create an empty, unbounded cache.
    pub fn new() -> Self {
        // No capacity or TTL: nothing is ever evicted.
        Self {
            entries: MokaCache::builder().build(),
        }
    }

    /// Look up a key. `None` means the key has never been resolved.
    pub async fn lookup(&self, key: &K) -> Option<Resolved<V>> {
        self.entries.get(key).await
    }

    /// Record a found value.
    pub async fn insert(&self, key: K, value: V) {
        self.entries.insert(key, Resolved::Found(value)).await;
    }

    /// Record that the key resolved to nothing.
    pub async fn mark_absent(&self, key: K) {
        self.entries.insert(key, Resolved::Absent).await;
    }

    /// Whether the key has been resolved (found or absent).
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Return the cached resolution for `key`, running `fetch` on a miss.
    ///
    /// `Ok(Some(v))` from the fetch is stored as found, `Ok(None)` as absent.
    /// An `Err` is returned to the caller and nothing is stored, so a later
    /// call will try again.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<Option<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<V>, E>>,
    {
        if let Some(resolved) = self.lookup(&key).await {
            trace!("memo cache hit");
            return Ok(resolved.found());
        }

        trace!("memo cache miss");
        match fetch().await? {
            Some(value) => {
                self.insert(key, value.clone()).await;
                Ok(Some(value))
            }
            None => {
                self.mark_absent(key).await;
                Ok(None)
            }
        }
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn unresolved_key_is_none() {
        let cache: MemoCache<String, u32> = MemoCache::new();
        assert_eq!(cache.lookup(&"BOS".to_string()).await, None);
        assert!(!cache.contains(&"BOS".to_string()));
    }

    #[tokio::test]
    async fn absent_is_distinct_from_unresolved() {
        let cache: MemoCache<String, u32> = MemoCache::new();
        cache.mark_absent("XYZ".to_string()).await;

        assert_eq!(
            cache.lookup(&"XYZ".to_string()).await,
            Some(Resolved::Absent)
        );
        assert!(cache.contains(&"XYZ".to_string()));
    }

    #[tokio::test]
    async fn fetch_runs_once_per_key() {
        let cache: MemoCache<&'static str, u32> = MemoCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_try_fetch("BOS", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(Some(42))
                })
                .await
                .unwrap();
            assert_eq!(value, Some(42));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn absent_result_is_remembered() {
        let cache: MemoCache<&'static str, u32> = MemoCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = cache
                .get_or_try_fetch("ZZZ", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(None)
                })
                .await
                .unwrap();
            assert_eq!(value, None);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache: MemoCache<(), u32> = MemoCache::new();

        let first = cache
            .get_or_try_fetch((), || async { Err::<Option<u32>, _>("offline") })
            .await;
        assert_eq!(first, Err("offline"));
        assert!(!cache.contains(&()));

        let second = cache
            .get_or_try_fetch((), || async { Ok::<_, &str>(Some(7)) })
            .await;
        assert_eq!(second, Ok(Some(7)));
    }
}
