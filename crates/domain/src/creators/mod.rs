//! Creators: hold the currently selected factory and forward requests to it.
//!
//! A creator starts empty. Every creation call on an empty creator is a
//! silent no-op returning `None` (or writing nothing, for data processing).

mod character;
mod data_processor;
mod furniture;

pub use character::CharacterCreator;
pub use data_processor::DataProcessorCreator;
pub use furniture::FurnitureCreator;
