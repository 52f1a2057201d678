//! Character entity - The product of the character factories

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A playable character with its look, kit, and base traits.
///
/// Plain data struct: every field is filled in by the factory that builds it,
/// and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub appearance: String,
    pub abilities: Vec<String>,
    pub equipment: Vec<String>,
    /// Trait name to score (e.g., "Strength" -> 10)
    pub attributes: BTreeMap<String, i32>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        appearance: impl Into<String>,
        abilities: Vec<String>,
        equipment: Vec<String>,
        attributes: BTreeMap<String, i32>,
    ) -> Self {
        Self {
            name: name.into(),
            appearance: appearance.into(),
            abilities,
            equipment,
            attributes,
        }
    }

    /// Look up a single attribute score.
    pub fn attribute(&self, name: &str) -> Option<i32> {
        self.attributes.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        Character::new(
            "Conan",
            "Warrior's appearance",
            vec!["Warrior's abilities".to_string()],
            vec!["Warrior's equipment".to_string()],
            BTreeMap::from([("Strength".to_string(), 10), ("Defense".to_string(), 8)]),
        )
    }

    #[test]
    fn attribute_lookup() {
        let character = sample();
        assert_eq!(character.attribute("Strength"), Some(10));
        assert_eq!(character.attribute("Defense"), Some(8));
        assert_eq!(character.attribute("Luck"), None);
    }

    #[test]
    fn serializes_as_field_mapping() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["name"], "Conan");
        assert_eq!(json["abilities"][0], "Warrior's abilities");
        assert_eq!(json["attributes"]["Strength"], 10);
    }
}
