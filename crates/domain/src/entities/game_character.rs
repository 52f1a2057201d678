//! ConcreteCharacter and Weapon - Products of the game loadout factories

use serde::{Deserialize, Serialize};

/// A weapon carried by exactly one [`ConcreteCharacter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Weapon type label (e.g., "Sword", "Staff", "Bow")
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
    pub speed: u32,
    pub range: u32,
}

impl Weapon {
    pub fn new(kind: impl Into<String>, damage: u32, speed: u32, range: u32) -> Self {
        Self {
            kind: kind.into(),
            damage,
            speed,
            range,
        }
    }
}

/// A ready-to-play character for the multiplayer game.
///
/// Owns its [`Weapon`]; the weapon is never shared between characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteCharacter {
    pub name: String,
    /// Class label (e.g., "Warrior")
    #[serde(rename = "char_class")]
    pub class: String,
    pub weapon: Weapon,
    pub health: u32,
    pub mana: u32,
}

impl ConcreteCharacter {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        weapon: Weapon,
        health: u32,
        mana: u32,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            weapon,
            health,
            mana,
        }
    }
}
