//! Concrete factories for every product family.
//!
//! # Families
//!
//! - Characters: [`WarriorFactory`], [`MageFactory`], [`ArcherFactory`]
//! - Game loadouts: [`WarriorSwordFactory`], [`MageStaffFactory`], [`ArcherBowFactory`]
//! - Furniture lines: [`ModernWoodFactory`], [`TraditionalMetalFactory`],
//!   [`IndustrialGlassFactory`]
//! - Data processors: [`TextDataProcessor`], [`AudioDataProcessor`], [`VideoDataProcessor`]

mod character;
mod data_processor;
mod furniture;
mod game_character;
mod traits;

pub use character::{ArcherFactory, MageFactory, WarriorFactory};
pub use data_processor::{AudioDataProcessor, TextDataProcessor, VideoDataProcessor};
pub use furniture::{IndustrialGlassFactory, ModernWoodFactory, TraditionalMetalFactory};
pub use game_character::{ArcherBowFactory, MageStaffFactory, WarriorSwordFactory};
pub use traits::{CharacterFactory, DataProcessor, FurnitureFactory};

#[cfg(test)]
pub use traits::{MockCharacterFactory, MockFurnitureFactory};
