//! Expiring cache for Pokedex API responses.
//!
//! Stores raw response bodies keyed by request URL. A background reaper
//! evicts entries older than the configured interval; reads never check age.

mod cache;
mod reaper;

pub use cache::{CacheStats, ExpiringCache};
