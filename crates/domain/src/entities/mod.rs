//! Product entities built by the factories.

mod character;
mod data;
mod furniture;
mod game_character;

pub use character::Character;
pub use data::Data;
pub use furniture::Furniture;
pub use game_character::{ConcreteCharacter, Weapon};
