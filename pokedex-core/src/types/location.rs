//! Location-area types.
//!
//! A listing page carries the `next`/`previous` URLs that drive `map`/`mapb`
//! pagination; a detail response carries the encounters shown by `explore`.

use serde::{Deserialize, Serialize};

use super::resource::NamedResource;

/// One page of the `/location-area` listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Returns true if a following page exists.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if a preceding page exists.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Iterates over the area names on this page.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}

/// A single location area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    /// Numeric area ID
    pub id: u64,
    /// Area name
    pub name: String,
    /// Internal game index
    #[serde(default)]
    pub game_index: u64,
    /// The location this area belongs to
    pub location: Option<NamedResource>,
    /// Pokémon that can be encountered here
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationAreaDetail {
    /// Iterates over the names of Pokémon found in this area.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
    }
}

/// A Pokémon encounter entry within a location area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokémon encountered
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "count": 1054,
        "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
            {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
        ]
    }"#;

    #[test]
    fn test_page_decode() {
        let page: LocationAreaPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.count, 1054);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(
            page.names().collect::<Vec<_>>(),
            vec!["canalave-city-area", "eterna-city-area"]
        );
    }

    #[test]
    fn test_detail_decode_ignores_unmodeled_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "encounter_method_rates": [],
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
            "names": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u1"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "u2"}, "version_details": []}
            ]
        }"#;
        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.name, "canalave-city-area");
        assert_eq!(
            detail.pokemon_names().collect::<Vec<_>>(),
            vec!["tentacool", "tentacruel"]
        );
    }

    #[test]
    fn test_detail_without_encounters() {
        let json = r#"{"id": 7, "name": "empty-area", "location": null}"#;
        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pokemon_names().count(), 0);
        assert_eq!(detail.game_index, 0);
    }
}
