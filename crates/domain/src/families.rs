//! Typed selectors for each factory family.
//!
//! These let callers (config, CLI, registry) pick a concrete factory by name
//! without naming the factory type.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::{Character, ConcreteCharacter, Furniture};
use crate::error::DomainError;
use crate::factories::{
    ArcherBowFactory, ArcherFactory, AudioDataProcessor, CharacterFactory, DataProcessor,
    FurnitureFactory, IndustrialGlassFactory, MageFactory, MageStaffFactory, ModernWoodFactory,
    TextDataProcessor, TraditionalMetalFactory, VideoDataProcessor, WarriorFactory,
    WarriorSwordFactory,
};

/// Normalize a user-supplied name: lowercase, with `-` and spaces folded to `_`.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

// ============================================================================
// Character Class
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Archer,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [Self::Warrior, Self::Mage, Self::Archer];

    pub fn factory(self) -> Arc<dyn CharacterFactory<Product = Character>> {
        match self {
            Self::Warrior => Arc::new(WarriorFactory),
            Self::Mage => Arc::new(MageFactory),
            Self::Archer => Arc::new(ArcherFactory),
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warrior => write!(f, "warrior"),
            Self::Mage => write!(f, "mage"),
            Self::Archer => write!(f, "archer"),
        }
    }
}

impl std::str::FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "warrior" => Ok(Self::Warrior),
            "mage" => Ok(Self::Mage),
            "archer" => Ok(Self::Archer),
            _ => Err(DomainError::unknown_family("character class", s)),
        }
    }
}

// ============================================================================
// Loadout
// ============================================================================

/// A game character class bundled with its weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loadout {
    WarriorSword,
    MageStaff,
    ArcherBow,
}

impl Loadout {
    pub const ALL: [Loadout; 3] = [Self::WarriorSword, Self::MageStaff, Self::ArcherBow];

    pub fn factory(self) -> Arc<dyn CharacterFactory<Product = ConcreteCharacter>> {
        match self {
            Self::WarriorSword => Arc::new(WarriorSwordFactory),
            Self::MageStaff => Arc::new(MageStaffFactory),
            Self::ArcherBow => Arc::new(ArcherBowFactory),
        }
    }
}

impl std::fmt::Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WarriorSword => write!(f, "warrior_sword"),
            Self::MageStaff => write!(f, "mage_staff"),
            Self::ArcherBow => write!(f, "archer_bow"),
        }
    }
}

impl std::str::FromStr for Loadout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "warrior_sword" | "warriorsword" => Ok(Self::WarriorSword),
            "mage_staff" | "magestaff" => Ok(Self::MageStaff),
            "archer_bow" | "archerbow" => Ok(Self::ArcherBow),
            _ => Err(DomainError::unknown_family("loadout", s)),
        }
    }
}

// ============================================================================
// Furniture Line
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureLine {
    ModernWood,
    TraditionalMetal,
    IndustrialGlass,
}

impl FurnitureLine {
    pub const ALL: [FurnitureLine; 3] = [
        Self::ModernWood,
        Self::TraditionalMetal,
        Self::IndustrialGlass,
    ];

    pub fn factory(self) -> Arc<dyn FurnitureFactory> {
        match self {
            Self::ModernWood => Arc::new(ModernWoodFactory),
            Self::TraditionalMetal => Arc::new(TraditionalMetalFactory),
            Self::IndustrialGlass => Arc::new(IndustrialGlassFactory),
        }
    }
}

impl std::fmt::Display for FurnitureLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModernWood => write!(f, "modern_wood"),
            Self::TraditionalMetal => write!(f, "traditional_metal"),
            Self::IndustrialGlass => write!(f, "industrial_glass"),
        }
    }
}

impl std::str::FromStr for FurnitureLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "modern_wood" | "modernwood" => Ok(Self::ModernWood),
            "traditional_metal" | "traditionalmetal" => Ok(Self::TraditionalMetal),
            "industrial_glass" | "industrialglass" => Ok(Self::IndustrialGlass),
            _ => Err(DomainError::unknown_family("furniture line", s)),
        }
    }
}

// ============================================================================
// Furniture Piece
// ============================================================================

/// Which creation operation of a furniture line to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurniturePiece {
    Chair,
    Table,
    Sofa,
}

impl FurniturePiece {
    pub const ALL: [FurniturePiece; 3] = [Self::Chair, Self::Table, Self::Sofa];

    /// Build this piece with the given factory.
    pub fn build(self, factory: &dyn FurnitureFactory) -> Furniture {
        match self {
            Self::Chair => factory.create_chair(),
            Self::Table => factory.create_table(),
            Self::Sofa => factory.create_sofa(),
        }
    }
}

impl std::fmt::Display for FurniturePiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chair => write!(f, "chair"),
            Self::Table => write!(f, "table"),
            Self::Sofa => write!(f, "sofa"),
        }
    }
}

impl std::str::FromStr for FurniturePiece {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "chair" => Ok(Self::Chair),
            "table" => Ok(Self::Table),
            "sofa" => Ok(Self::Sofa),
            _ => Err(DomainError::unknown_family("furniture piece", s)),
        }
    }
}

// ============================================================================
// Data Kind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Text,
    Audio,
    Video,
}

impl DataKind {
    pub const ALL: [DataKind; 3] = [Self::Text, Self::Audio, Self::Video];

    pub fn processor(self) -> Arc<dyn DataProcessor> {
        match self {
            Self::Text => Arc::new(TextDataProcessor),
            Self::Audio => Arc::new(AudioDataProcessor),
            Self::Video => Arc::new(VideoDataProcessor),
        }
    }

    /// Type label carried by [`crate::Data`] records of this kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for DataKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "text" => Ok(Self::Text),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            _ => Err(DomainError::unknown_family("data kind", s)),
        }
    }
}
