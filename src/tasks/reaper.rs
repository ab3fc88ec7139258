//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that reaps expired entries from `store`.
///
/// The task wakes every `period` (the first wake-up is one full period after
/// the call), takes the write lock just long enough to drop stale entries,
/// and goes back to sleep. It runs until `shutdown` flips to `true` or its
/// sender is dropped.
///
/// # Arguments
/// * `store` - Shared store to reap
/// * `period` - Interval between reap cycles; the cache passes its ttl
/// * `shutdown` - Stop signal
///
/// # Returns
/// A JoinHandle for the spawned task.
pub fn spawn_reaper_task(
    store: Arc<RwLock<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let start = Instant::now() + period;

    tokio::spawn(async move {
        debug!("Starting cache reaper with period of {:?}", period);
        let mut ticker = interval_at(start, period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.write().await;
                        guard.reap_expired()
                    };

                    if removed > 0 {
                        info!("Cache reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reaper: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means every sender is gone
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Cache reaper stopped");
    })
}
