//! Named resource references.

use serde::{Deserialize, Serialize};

/// A reference to another PokeAPI resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. "canalave-city-area")
    pub name: String,
    /// Fully-qualified URL of the resource
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_resource_roundtrip_ignores_unknown_fields() {
        let json = r#"{"name":"pikachu","url":"https://pokeapi.co/api/v2/pokemon/25/","extra":1}"#;
        let res: NamedResource = serde_json::from_str(json).unwrap();
        assert_eq!(res.name, "pikachu");
        assert_eq!(res.url, "https://pokeapi.co/api/v2/pokemon/25/");
    }
}
