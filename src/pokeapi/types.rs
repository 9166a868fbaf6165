use serde::Deserialize;

/// The slice of the PokéAPI pokémon payload the lookup pane renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimetres, as the API reports it.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl Pokemon {
    /// Type names in slot order, e.g. `["grass", "poison"]`.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_payload_subset() {
        let raw = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(raw).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.type_names(), vec!["electric"]);
        assert_eq!(pokemon.stats[1].base_stat, 90);
    }

    #[test]
    fn missing_type_and_stat_lists_default_to_empty() {
        let raw = r#"{"id": 132, "name": "ditto", "height": 3, "weight": 40}"#;
        let pokemon: Pokemon = serde_json::from_str(raw).unwrap();
        assert!(pokemon.types.is_empty());
        assert!(pokemon.stats.is_empty());
    }
}
