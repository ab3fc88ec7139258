//! Cache Module
//!
//! Provides the expiring response cache: an in-memory store keyed by request
//! URL, shared behind a lock, and reaped in batches by a background task.

mod entry;
mod handle;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default expiry window in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
