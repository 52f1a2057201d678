//! Character factories: Warrior, Mage, Archer.

use std::collections::BTreeMap;

use super::CharacterFactory;
use crate::entities::Character;

/// Build a character from a class label and its two attribute scores.
///
/// All three classes follow the same template: appearance, abilities, and
/// equipment are named after the class.
fn class_character(name: &str, class: &str, attributes: [(&str, i32); 2]) -> Character {
    Character::new(
        name,
        format!("{class}'s appearance"),
        vec![format!("{class}'s abilities")],
        vec![format!("{class}'s equipment")],
        attributes
            .into_iter()
            .map(|(attr, score)| (attr.to_string(), score))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarriorFactory;

impl CharacterFactory for WarriorFactory {
    type Product = Character;

    fn factory_id(&self) -> &'static str {
        "warrior"
    }

    fn create_character(&self, name: &str) -> Character {
        class_character(name, "Warrior", [("Strength", 10), ("Defense", 8)])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MageFactory;

impl CharacterFactory for MageFactory {
    type Product = Character;

    fn factory_id(&self) -> &'static str {
        "mage"
    }

    fn create_character(&self, name: &str) -> Character {
        class_character(name, "Mage", [("Intelligence", 10), ("Mana", 100)])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcherFactory;

impl CharacterFactory for ArcherFactory {
    type Product = Character;

    fn factory_id(&self) -> &'static str {
        "archer"
    }

    fn create_character(&self, name: &str) -> Character {
        class_character(name, "Archer", [("Dexterity", 10), ("Accuracy", 8)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, i32)]) -> BTreeMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn warrior_conan() {
        let conan = WarriorFactory.create_character("Conan");
        assert_eq!(conan.name, "Conan");
        assert_eq!(conan.appearance, "Warrior's appearance");
        assert_eq!(conan.abilities, vec!["Warrior's abilities"]);
        assert_eq!(conan.equipment, vec!["Warrior's equipment"]);
        assert_eq!(conan.attributes, attrs(&[("Strength", 10), ("Defense", 8)]));
    }

    #[test]
    fn mage_constants() {
        let mage = MageFactory.create_character("Merlin");
        assert_eq!(mage.name, "Merlin");
        assert_eq!(mage.appearance, "Mage's appearance");
        assert_eq!(mage.abilities, vec!["Mage's abilities"]);
        assert_eq!(mage.equipment, vec!["Mage's equipment"]);
        assert_eq!(
            mage.attributes,
            attrs(&[("Intelligence", 10), ("Mana", 100)])
        );
    }

    #[test]
    fn archer_constants() {
        let archer = ArcherFactory.create_character("Robin");
        assert_eq!(archer.name, "Robin");
        assert_eq!(archer.appearance, "Archer's appearance");
        assert_eq!(archer.abilities, vec!["Archer's abilities"]);
        assert_eq!(archer.equipment, vec!["Archer's equipment"]);
        assert_eq!(
            archer.attributes,
            attrs(&[("Dexterity", 10), ("Accuracy", 8)])
        );
    }

    #[test]
    fn name_is_passed_through_untouched() {
        for name in ["", "Warrior", "  spaced  ", "Ælfgifu"] {
            assert_eq!(WarriorFactory.create_character(name).name, name);
            assert_eq!(MageFactory.create_character(name).name, name);
            assert_eq!(ArcherFactory.create_character(name).name, name);
        }
    }
}
