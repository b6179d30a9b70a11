//! PokeAPI client for the Pokedex REPL.
//!
//! Every request goes through an injected [`pokedex_cache::ExpiringCache`],
//! keyed by the fully-resolved request URL.

mod client;

pub use client::{ClientConfig, PokeApiClient};
