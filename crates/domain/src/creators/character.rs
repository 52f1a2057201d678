//! CharacterCreator - Forwards character requests to the selected factory

use std::sync::Arc;

use crate::factories::CharacterFactory;

/// Holds at most one character factory and delegates to it.
///
/// Generic over the product so the same creator drives both the
/// [`crate::Character`] factories and the game loadout factories.
pub struct CharacterCreator<P> {
    factory: Option<Arc<dyn CharacterFactory<Product = P>>>,
}

impl<P> Default for CharacterCreator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CharacterCreator<P> {
    /// Create a creator with no factory assigned.
    pub fn new() -> Self {
        Self { factory: None }
    }

    /// Replace the current factory.
    pub fn set_factory<F>(&mut self, factory: F)
    where
        F: CharacterFactory<Product = P> + 'static,
    {
        self.set_shared_factory(Arc::new(factory));
    }

    /// Replace the current factory with one shared from a registry or selector.
    pub fn set_shared_factory(&mut self, factory: Arc<dyn CharacterFactory<Product = P>>) {
        tracing::debug!(factory = factory.factory_id(), "Character factory assigned");
        self.factory = Some(factory);
    }

    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Id of the current factory, if any.
    pub fn factory_id(&self) -> Option<&'static str> {
        self.factory.as_ref().map(|f| f.factory_id())
    }

    /// Build a character with the current factory.
    ///
    /// Returns `None` without doing anything if no factory has been assigned.
    pub fn create_character(&self, name: &str) -> Option<P> {
        let Some(factory) = &self.factory else {
            tracing::debug!(name, "No character factory assigned, skipping creation");
            return None;
        };
        tracing::trace!(factory = factory.factory_id(), name, "Creating character");
        Some(factory.create_character(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Character, ConcreteCharacter};
    use crate::factories::{
        MageFactory, MageStaffFactory, MockCharacterFactory, WarriorFactory, WarriorSwordFactory,
    };

    #[test]
    fn without_factory_returns_none() {
        let creator: CharacterCreator<Character> = CharacterCreator::new();
        assert!(!creator.has_factory());
        assert_eq!(creator.factory_id(), None);
        assert_eq!(creator.create_character("Nobody"), None);
    }

    #[test]
    fn delegates_verbatim_to_factory() {
        let product = Character::new("Ghost", "translucent", vec![], vec![], Default::default());
        let expected = product.clone();

        let mut mock = MockCharacterFactory::new();
        mock.expect_factory_id().return_const("mock");
        mock.expect_create_character()
            .withf(|name| name == "Ghost")
            .times(1)
            .return_once(move |_| product);

        let mut creator = CharacterCreator::new();
        creator.set_factory(mock);

        assert_eq!(creator.create_character("Ghost"), Some(expected));
    }

    #[test]
    fn reassigning_uses_only_the_new_factory() {
        let mut old = MockCharacterFactory::new();
        old.expect_factory_id().return_const("old");
        old.expect_create_character().never();

        let mut creator = CharacterCreator::new();
        creator.set_factory(old);
        creator.set_factory(MageFactory);

        assert_eq!(creator.factory_id(), Some("mage"));
        let character = creator
            .create_character("Merlin")
            .expect("factory assigned");
        assert_eq!(character, MageFactory.create_character("Merlin"));
    }

    #[test]
    fn same_creator_type_serves_game_characters() {
        let mut creator: CharacterCreator<ConcreteCharacter> = CharacterCreator::default();
        creator.set_factory(WarriorSwordFactory);
        let hero = creator
            .create_character("Brakka")
            .expect("factory assigned");
        assert_eq!(hero.weapon.kind, "Sword");

        creator.set_factory(MageStaffFactory);
        let hero = creator.create_character("Elora").expect("factory assigned");
        assert_eq!(hero.class, "Mage");
        assert_eq!(hero.mana, 100);
    }

    #[test]
    fn shared_factory_from_selector() {
        let mut creator = CharacterCreator::new();
        creator.set_shared_factory(crate::CharacterClass::Warrior.factory());
        assert_eq!(
            creator.create_character("Conan"),
            Some(WarriorFactory.create_character("Conan"))
        );
    }
}
