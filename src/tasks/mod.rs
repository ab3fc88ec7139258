//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes expired cache entries once per ttl

mod reaper;

pub use reaper::spawn_reaper_task;
