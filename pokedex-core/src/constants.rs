//! Constants for the Pokedex client.
//!
//! Endpoint locations and the defaults used when nothing is configured.

// ═══════════════════════════════════════════════════════════════════════════════
// POKEAPI ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the public PokeAPI (v2).
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Path segment for the location-area resource.
pub const LOCATION_AREA_PATH: &str = "location-area";

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default cache interval in seconds.
///
/// Used both as the staleness threshold for entries and as the reaper period.
pub const DEFAULT_CACHE_INTERVAL_SECS: u64 = 60;

/// Name given to the background reaper thread.
pub const REAPER_THREAD_NAME: &str = "pokedex-cache-reaper";

// ═══════════════════════════════════════════════════════════════════════════════
// NETWORK
// ═══════════════════════════════════════════════════════════════════════════════

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
        assert!(DEFAULT_API_BASE_URL.starts_with("https://"));
    }

    #[test]
    fn test_defaults_are_positive() {
        assert!(DEFAULT_CACHE_INTERVAL_SECS > 0);
        assert!(DEFAULT_HTTP_TIMEOUT_SECS > 0);
    }
}
