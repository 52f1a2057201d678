//! Registry of available factories, looked up by id.

use std::sync::Arc;

use crate::entities::{Character, ConcreteCharacter};
use crate::factories::{
    ArcherBowFactory, ArcherFactory, AudioDataProcessor, CharacterFactory, DataProcessor,
    FurnitureFactory, IndustrialGlassFactory, MageFactory, MageStaffFactory, ModernWoodFactory,
    TextDataProcessor, TraditionalMetalFactory, VideoDataProcessor, WarriorFactory,
    WarriorSwordFactory,
};

type SharedCharacterFactory = Arc<dyn CharacterFactory<Product = Character>>;
type SharedLoadoutFactory = Arc<dyn CharacterFactory<Product = ConcreteCharacter>>;

/// Registry of factories for every family.
///
/// Lookups return the first registered factory with a matching id, so ids
/// registered later never shadow built-ins.
pub struct FactoryRegistry {
    characters: Vec<SharedCharacterFactory>,
    loadouts: Vec<SharedLoadoutFactory>,
    furniture: Vec<Arc<dyn FurnitureFactory>>,
    processors: Vec<Arc<dyn DataProcessor>>,
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FactoryRegistry {
    /// Create a new registry with all built-in factories.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        // Register built-in factories
        registry.register_character(Arc::new(WarriorFactory));
        registry.register_character(Arc::new(MageFactory));
        registry.register_character(Arc::new(ArcherFactory));

        registry.register_loadout(Arc::new(WarriorSwordFactory));
        registry.register_loadout(Arc::new(MageStaffFactory));
        registry.register_loadout(Arc::new(ArcherBowFactory));

        registry.register_furniture(Arc::new(ModernWoodFactory));
        registry.register_furniture(Arc::new(TraditionalMetalFactory));
        registry.register_furniture(Arc::new(IndustrialGlassFactory));

        registry.register_processor(Arc::new(TextDataProcessor));
        registry.register_processor(Arc::new(AudioDataProcessor));
        registry.register_processor(Arc::new(VideoDataProcessor));
        registry
    }

    /// Create an empty registry without built-in factories.
    pub fn empty() -> Self {
        Self {
            characters: Vec::new(),
            loadouts: Vec::new(),
            furniture: Vec::new(),
            processors: Vec::new(),
        }
    }

    pub fn register_character(&mut self, factory: SharedCharacterFactory) {
        self.characters.push(factory);
    }

    pub fn register_loadout(&mut self, factory: SharedLoadoutFactory) {
        self.loadouts.push(factory);
    }

    pub fn register_furniture(&mut self, factory: Arc<dyn FurnitureFactory>) {
        self.furniture.push(factory);
    }

    pub fn register_processor(&mut self, processor: Arc<dyn DataProcessor>) {
        self.processors.push(processor);
    }

    pub fn character_factory(&self, id: &str) -> Option<SharedCharacterFactory> {
        self.characters
            .iter()
            .find(|f| f.factory_id() == id)
            .cloned()
    }

    pub fn loadout_factory(&self, id: &str) -> Option<SharedLoadoutFactory> {
        self.loadouts.iter().find(|f| f.factory_id() == id).cloned()
    }

    pub fn furniture_factory(&self, id: &str) -> Option<Arc<dyn FurnitureFactory>> {
        self.furniture
            .iter()
            .find(|f| f.factory_id() == id)
            .cloned()
    }

    pub fn data_processor(&self, id: &str) -> Option<Arc<dyn DataProcessor>> {
        self.processors
            .iter()
            .find(|p| p.factory_id() == id)
            .cloned()
    }

    /// List registered character factory ids.
    pub fn list_characters(&self) -> Vec<&'static str> {
        self.characters.iter().map(|f| f.factory_id()).collect()
    }

    pub fn list_loadouts(&self) -> Vec<&'static str> {
        self.loadouts.iter().map(|f| f.factory_id()).collect()
    }

    pub fn list_furniture(&self) -> Vec<&'static str> {
        self.furniture.iter().map(|f| f.factory_id()).collect()
    }

    pub fn list_processors(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.factory_id()).collect()
    }
}
