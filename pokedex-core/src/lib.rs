//! # Pokedex Core
//!
//! Core types, errors, and constants for the Pokedex client.
//!
//! This crate provides the foundational building blocks used by all other Pokedex crates:
//!
//! - **Types**: PokeAPI response models for location areas and encounters
//! - **Errors**: A single error enum shared by the cache, client, and REPL
//! - **Constants**: API endpoints and default tunables
//!
//! ## Example
//!
//! ```rust
//! use pokedex_core::LocationAreaPage;
//!
//! let json = r#"{"count":1,"next":null,"previous":null,"results":[]}"#;
//! let page: LocationAreaPage = serde_json::from_str(json).unwrap();
//! assert!(!page.has_next());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{PokedexError, Result};
pub use types::*;
