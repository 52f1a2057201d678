//! Game loadout factories: a class paired with its signature weapon.

use super::CharacterFactory;
use crate::entities::{ConcreteCharacter, Weapon};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarriorSwordFactory;

impl CharacterFactory for WarriorSwordFactory {
    type Product = ConcreteCharacter;

    fn factory_id(&self) -> &'static str {
        "warrior_sword"
    }

    fn create_character(&self, name: &str) -> ConcreteCharacter {
        ConcreteCharacter::new(name, "Warrior", Weapon::new("Sword", 15, 5, 10), 100, 50)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MageStaffFactory;

impl CharacterFactory for MageStaffFactory {
    type Product = ConcreteCharacter;

    fn factory_id(&self) -> &'static str {
        "mage_staff"
    }

    fn create_character(&self, name: &str) -> ConcreteCharacter {
        ConcreteCharacter::new(name, "Mage", Weapon::new("Staff", 10, 8, 15), 80, 100)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcherBowFactory;

impl CharacterFactory for ArcherBowFactory {
    type Product = ConcreteCharacter;

    fn factory_id(&self) -> &'static str {
        "archer_bow"
    }

    fn create_character(&self, name: &str) -> ConcreteCharacter {
        ConcreteCharacter::new(name, "Archer", Weapon::new("Bow", 12, 6, 20), 90, 70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mage_staff_elora() {
        let elora = MageStaffFactory.create_character("Elora");
        assert_eq!(elora.name, "Elora");
        assert_eq!(elora.class, "Mage");
        assert_eq!(elora.weapon, Weapon::new("Staff", 10, 8, 15));
        assert_eq!(elora.health, 80);
        assert_eq!(elora.mana, 100);
    }

    #[test]
    fn warrior_sword_constants() {
        let hero = WarriorSwordFactory.create_character("Brakka");
        let expected = ConcreteCharacter::new(
            "Brakka",
            "Warrior",
            Weapon::new("Sword", 15, 5, 10),
            100,
            50,
        );
        assert_eq!(hero, expected);
    }

    #[test]
    fn archer_bow_constants() {
        let hero = ArcherBowFactory.create_character("Lyra");
        assert_eq!(
            hero,
            ConcreteCharacter::new("Lyra", "Archer", Weapon::new("Bow", 12, 6, 20), 90, 70)
        );
    }

    #[test]
    fn each_character_gets_its_own_weapon() {
        let a = MageStaffFactory.create_character("A");
        let mut b = MageStaffFactory.create_character("B");
        b.weapon.damage += 5;
        assert_eq!(a.weapon.damage, 10);
    }
}
