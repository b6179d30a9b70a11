//! Error types for the Pokedex client.
//!
//! This module provides the error hierarchy using `thiserror`.
//! The cache itself is total; everything here belongs to construction,
//! the network collaborator, or the REPL.

use thiserror::Error;

/// Result type alias using `PokedexError`.
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Main error type for all Pokedex operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CACHE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The cache interval must be a positive duration.
    #[error("Invalid cache interval: must be greater than zero")]
    InvalidCacheInterval,

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Server answered with a non-success status.
    #[error("Request to '{url}' failed with HTTP {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON decoding error (malformed payload).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // COMMAND ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// `mapb` issued while already on the first page.
    #[error("you are already on the first page")]
    NoPreviousPage,

    /// Command requires an argument that was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// Verb not present in the command table.
    #[error("unknown command '{0}'. Use \"help\" to see available commands")]
    UnknownCommand(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION & I/O
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal or file I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        match self {
            PokedexError::HttpError(_) => true,
            PokedexError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns true if the user can fix this by typing a different command.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PokedexError::NoPreviousPage
                | PokedexError::MissingArgument(_)
                | PokedexError::UnknownCommand(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = PokedexError::HttpStatus {
            url: "https://pokeapi.co/api/v2/location-area/nowhere".into(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("nowhere"));
        assert_eq!(
            PokedexError::NoPreviousPage.to_string(),
            "you are already on the first page"
        );
    }

    #[test_case(500, true ; "server error")]
    #[test_case(503, true ; "unavailable")]
    #[test_case(429, true ; "rate limited")]
    #[test_case(404, false ; "not found")]
    #[test_case(400, false ; "bad request")]
    fn test_status_recoverability(status: u16, expected: bool) {
        let err = PokedexError::HttpStatus { url: "u".into(), status };
        assert_eq!(err.is_recoverable(), expected);
    }

    #[test]
    fn test_error_classification() {
        assert!(PokedexError::HttpError("reset".into()).is_recoverable());
        assert!(!PokedexError::InvalidCacheInterval.is_recoverable());

        assert!(PokedexError::NoPreviousPage.is_user_error());
        assert!(PokedexError::MissingArgument("area".into()).is_user_error());
        assert!(PokedexError::UnknownCommand("fly".into()).is_user_error());
        assert!(!PokedexError::HttpError("reset".into()).is_user_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(PokedexError::from);
        assert!(matches!(result, Err(PokedexError::JsonError(_))));
    }
}
