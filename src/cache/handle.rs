//! Shared Cache Handle
//!
//! Thread-safe wrapper that owns the store lock and the reaper's stop signal.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Expiring response cache shared between command handlers and the reaper.
///
/// Cloning is cheap: every clone points at the same store. Expired entries
/// are removed in batches by a background task that wakes once per ttl, so
/// an entry can stay visible for up to roughly twice the ttl.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Store guarded by a single lock
    store: Arc<RwLock<CacheStore>>,
    /// Expiry window
    ttl: Duration,
    /// Flipped to `true` to end the reaper
    shutdown: Arc<watch::Sender<bool>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio
    /// runtime.
    ///
    /// # Panics
    /// Panics if `ttl` is zero, or if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "cache ttl must be greater than zero");

        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);

        // The task is detached; it ends on `stop` or when the last handle
        // drops the sender.
        spawn_reaper_task(store.clone(), ttl, shutdown_rx);

        Self {
            store,
            ttl,
            shutdown: Arc::new(shutdown),
        }
    }

    /// Returns the expiry window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores `value` under `key` with a fresh timestamp. Last write wins.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache insert");

        let mut store = self.store.write().await;
        store.insert(key, value);
    }

    // == Lookup ==
    /// Returns a copy of the value under `key` if present, whatever its age.
    pub async fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        store.lookup(key)
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stop ==
    /// Signals the reaper to exit. Stored entries remain readable but are
    /// no longer expired. Calling this more than once has no further effect.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = Cache::new(Duration::from_secs(1));

        assert!(cache.lookup("k").await.is_none());
        cache.insert("k", b"v".to_vec()).await;

        assert_eq!(cache.lookup("k").await.unwrap(), b"v");
    }

    #[tokio::test]
    async fn test_overwrite_scenario() {
        let cache = Cache::new(Duration::from_secs(1));

        cache.insert("x", "A").await;
        cache.insert("x", "B").await;

        assert_eq!(cache.lookup("x").await.unwrap(), b"B");
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_independent_keys() {
        let cache = Cache::new(Duration::from_secs(1));

        cache.insert("k1", "v1").await;

        assert!(cache.lookup("k2").await.is_none());
        cache.insert("k2", "v2").await;
        assert_eq!(cache.lookup("k1").await.unwrap(), b"v1");
        assert_eq!(cache.lookup("k2").await.unwrap(), b"v2");
    }

    #[tokio::test]
    async fn test_expiry_scenario_real_time() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.insert("a", vec![1u8, 2, 3]).await;
        assert_eq!(cache.lookup("a").await.unwrap(), vec![1, 2, 3]);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.lookup("a").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_eventual_expiry() {
        let ttl = Duration::from_secs(10);
        let cache = Cache::new(ttl);

        cache.insert("k", "v").await;
        tokio::time::sleep(ttl * 3).await;

        assert!(cache.lookup("k").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_premature_eviction() {
        let ttl = Duration::from_secs(10);
        let cache = Cache::new(ttl);

        // Let a reap cycle pass first so the insert lands mid-period
        tokio::time::sleep(ttl + Duration::from_secs(1)).await;
        cache.insert("k", "v").await;
        assert_eq!(cache.lookup("k").await.unwrap(), b"v");

        // The next cycle fires 9s after insert, before the entry is stale
        tokio::time::sleep(Duration::from_secs(9) + Duration::from_millis(500)).await;
        assert_eq!(cache.lookup("k").await.unwrap(), b"v");
    }

    #[tokio::test(start_paused = true)]
    async fn test_staleness_bounded_by_two_ttls() {
        let ttl = Duration::from_secs(10);
        let cache = Cache::new(ttl);

        // Inserted 1s after the cycle at t=10: still live at the t=20 cycle
        // (age 9s), past ttl but unreaped before t=30, gone after it.
        tokio::time::sleep(Duration::from_secs(11)).await;
        cache.insert("k", "v").await;

        tokio::time::sleep(Duration::from_secs(18)).await;
        assert!(
            cache.lookup("k").await.is_some(),
            "Stale entries wait for the next cycle"
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(cache.lookup("k").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_reaping() {
        let ttl = Duration::from_secs(1);
        let cache = Cache::new(ttl);

        cache.stop();
        cache.stop();
        cache.insert("k", "v").await;
        tokio::time::sleep(ttl * 5).await;

        assert_eq!(cache.lookup("k").await.unwrap(), b"v");
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = Cache::new(Duration::from_secs(1));
        let other = cache.clone();

        other.insert("shared", "value").await;

        assert_eq!(cache.lookup("shared").await.unwrap(), b"value");
        assert_eq!(cache.ttl(), other.ttl());
    }

    #[tokio::test]
    #[should_panic(expected = "greater than zero")]
    async fn test_zero_ttl_rejected() {
        let _ = Cache::new(Duration::ZERO);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access() {
        let ttl = Duration::from_millis(20);
        let cache = Cache::new(ttl);
        let keys: Vec<String> = (0..8).map(|i| format!("key{}", i)).collect();

        let mut handles = Vec::new();
        for worker in 0..8usize {
            let cache = cache.clone();
            let keys = keys.clone();
            handles.push(tokio::spawn(async move {
                let deadline = tokio::time::Instant::now() + Duration::from_millis(120);
                let mut round = 0usize;
                while tokio::time::Instant::now() < deadline {
                    let key = &keys[(worker + round) % keys.len()];
                    cache.insert(key.clone(), format!("{}:{}:{}", key, worker, round)).await;

                    let target = &keys[(worker * 3 + round) % keys.len()];
                    if let Some(bytes) = cache.lookup(target).await {
                        let text = String::from_utf8(bytes).expect("value is valid utf-8");
                        let parts: Vec<&str> = text.split(':').collect();
                        assert_eq!(parts.len(), 3, "value was written whole: {}", text);
                        assert_eq!(parts[0], target.as_str());
                    }

                    round += 1;
                    tokio::task::yield_now().await;
                }
            }));
        }

        for handle in handles {
            handle.await.expect("worker panicked");
        }

        assert!(cache.len().await <= keys.len());

        // Everything written is older than 2*ttl after another few cycles
        tokio::time::sleep(ttl * 4).await;
        assert!(cache.is_empty().await);
    }
}
