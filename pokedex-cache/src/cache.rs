//! In-memory expiring cache for raw response bodies.

use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use pokedex_core::error::{PokedexError, Result};

use crate::reaper;

/// Cache entry. Replaced wholesale on every `add`, never mutated.
#[derive(Clone)]
struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
}

impl CacheEntry {
    /// Stale only when strictly older than `interval`; an entry exactly at
    /// the threshold survives one more sweep.
    fn is_stale_at(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > interval
    }
}

/// State shared between cache handles and the reaper thread.
pub(crate) struct Shared {
    entries: RwLock<HashMap<String, CacheEntry>>,
    interval: Duration,
    /// Dropping this sender wakes the reaper, which then exits.
    _reaper_stop: Option<Sender<()>>,
}

impl Shared {
    /// Removes every entry older than the interval. Returns how many were removed.
    pub(crate) fn reap(&self) -> usize {
        let mut entries = self.entries.write();
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, e| !e.is_stale_at(now, self.interval));
        let removed = before - entries.len();

        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Reaped stale cache entries");
        }
        removed
    }
}

/// Expiring key-value cache.
///
/// Thread-safe and cheap to clone: every clone shares the same entries and
/// the same reaper. Construct one at startup and hand it to each consumer.
///
/// # Expiry
///
/// A single `interval` is both the staleness threshold and the reaper
/// period. [`get`](Self::get) never looks at an entry's age, so a stale
/// entry stays readable until the next sweep removes it (at most one extra
/// interval).
///
/// # Reaper
///
/// The reaper thread runs for as long as any handle is alive. There is no
/// public way to stop it.
#[derive(Clone)]
pub struct ExpiringCache {
    inner: Arc<Shared>,
}

impl ExpiringCache {
    /// Creates an empty cache and starts its reaper.
    ///
    /// Returns [`PokedexError::InvalidCacheInterval`] for a zero interval.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidCacheInterval);
        }

        let (stop_tx, stop_rx) = mpsc::channel();
        let inner = Arc::new(Shared {
            entries: RwLock::new(HashMap::new()),
            interval,
            _reaper_stop: Some(stop_tx),
        });

        reaper::spawn(Arc::downgrade(&inner), stop_rx, interval)?;
        debug!(?interval, "Expiring cache started");

        Ok(Self { inner })
    }

    /// Creates a cache with no reaper, so sweeps only happen when a test asks.
    #[cfg(test)]
    fn unreaped(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Shared {
                entries: RwLock::new(HashMap::new()),
                interval,
                _reaper_stop: None,
            }),
        }
    }

    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let entry = CacheEntry {
            value: value.into(),
            created_at: Instant::now(),
        };
        self.inner.entries.write().insert(key.into(), entry);
    }

    /// Returns a copy of the bytes stored under `key`.
    ///
    /// Stale entries not yet reaped are still returned. `Some(vec![])` is a
    /// cached empty body, distinct from a miss.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.entries.read().get(key).map(|e| e.value.clone())
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.inner.entries.read();
        let now = Instant::now();
        let stale = entries
            .values()
            .filter(|e| e.is_stale_at(now, self.inner.interval))
            .count();

        CacheStats {
            total_entries: entries.len(),
            stale_entries: stale,
            total_bytes: entries.values().map(|e| e.value.len()).sum(),
            interval: self.inner.interval,
        }
    }
}

impl std::fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("interval", &self.inner.interval)
            .field("entries", &self.len())
            .finish()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Total entries (including stale)
    pub total_entries: usize,
    /// Entries past the interval that the reaper has not removed yet
    pub stale_entries: usize,
    /// Sum of stored payload sizes
    pub total_bytes: usize,
    /// Staleness threshold and reaper period
    pub interval: Duration,
}
