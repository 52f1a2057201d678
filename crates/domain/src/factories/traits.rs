//! Factory traits for each product family.
//!
//! Every family shares the same shape: a trait with one creation method per
//! product, and one zero-sized type per concrete family that fills in the
//! family's fixed values. Creators hold these traits as `Arc<dyn ...>`.

use std::io::Write;

use crate::entities::{Data, Furniture};

/// Builds a character product from a name.
///
/// The product type is an associated type so one creator can drive both the
/// [`Character`](crate::Character) factories and the game loadout factories.
#[cfg_attr(test, mockall::automock(type Product = crate::Character;))]
pub trait CharacterFactory: Send + Sync {
    type Product;

    /// Stable identifier for this factory (e.g., "warrior").
    fn factory_id(&self) -> &'static str;

    /// Build a fully populated character called `name`.
    fn create_character(&self, name: &str) -> Self::Product;
}

/// Builds the matching pieces of one furniture line.
#[cfg_attr(test, mockall::automock)]
pub trait FurnitureFactory: Send + Sync {
    /// Stable identifier for this factory (e.g., "modern_wood").
    fn factory_id(&self) -> &'static str;

    fn create_chair(&self) -> Furniture;

    fn create_table(&self) -> Furniture;

    fn create_sofa(&self) -> Furniture;
}

/// Handles one kind of [`Data`].
///
/// Processing has no product: the whole effect is the line written to `out`.
pub trait DataProcessor: Send + Sync {
    /// Stable identifier for this processor (e.g., "audio").
    fn factory_id(&self) -> &'static str;

    fn process_data(&self, data: &Data, out: &mut dyn Write) -> std::io::Result<()>;
}
