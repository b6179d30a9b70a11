//! Background reaper.
//!
//! One OS thread per cache: sweep, wait one interval, repeat. The wait is a
//! timed receive on a stop channel, so the loop ends once the cache's shared
//! state is dropped (the sender goes with it).

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Weak;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use pokedex_core::constants::REAPER_THREAD_NAME;
use pokedex_core::error::Result;

use crate::cache::Shared;

/// Starts the reaper thread for `shared`.
pub(crate) fn spawn(shared: Weak<Shared>, stop: Receiver<()>, interval: Duration) -> Result<()> {
    thread::Builder::new()
        .name(REAPER_THREAD_NAME.to_string())
        .spawn(move || run(shared, stop, interval))?;
    Ok(())
}

fn run(shared: Weak<Shared>, stop: Receiver<()>, interval: Duration) {
    loop {
        // Only hold a strong reference for the duration of the sweep.
        match shared.upgrade() {
            Some(cache) => {
                let removed = cache.reap();
                trace!(removed, "Reap cycle complete");
            }
            None => break,
        }

        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    debug!("Cache reaper stopped");
}
