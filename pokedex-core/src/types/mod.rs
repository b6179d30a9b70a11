//! PokeAPI response types.
//!
//! Only the fields the client reads are modeled; serde ignores the rest.
//!
//! - [`NamedResource`]: `{ name, url }` reference used throughout PokeAPI
//! - [`LocationAreaPage`]: one page of the location-area listing
//! - [`LocationAreaDetail`]: a single area with its Pokémon encounters

mod location;
mod resource;

pub use location::*;
pub use resource::*;
