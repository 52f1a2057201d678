//! Forgeworks Domain
//!
//! Factory Method and Abstract Factory demonstrations:
//!
//! - `entities/` - Plain product records
//! - `factories/` - Factory traits and one concrete type per family
//! - `creators/` - Holders that forward requests to the selected factory
//! - `families` - Name-based selectors for each family
//! - `registry` - Factory lookup by id

pub mod creators;
pub mod entities;
pub mod error;
pub mod factories;
pub mod families;
pub mod registry;

pub use creators::{CharacterCreator, DataProcessorCreator, FurnitureCreator};
pub use entities::{Character, ConcreteCharacter, Data, Furniture, Weapon};
pub use error::DomainError;
pub use factories::{
    ArcherBowFactory, ArcherFactory, AudioDataProcessor, CharacterFactory, DataProcessor,
    FurnitureFactory, IndustrialGlassFactory, MageFactory, MageStaffFactory, ModernWoodFactory,
    TextDataProcessor, TraditionalMetalFactory, VideoDataProcessor, WarriorFactory,
    WarriorSwordFactory,
};
pub use families::{CharacterClass, DataKind, FurnitureLine, FurniturePiece, Loadout};
pub use registry::FactoryRegistry;
