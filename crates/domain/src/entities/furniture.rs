//! Furniture entity - The product of the furniture line factories

use serde::{Deserialize, Serialize};

/// A catalog entry for a single piece of furniture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Furniture {
    /// Display name (e.g., "Modern Wood Chair")
    pub name: String,
    pub style: String,
    pub material: String,
    pub price: u32,
}

impl Furniture {
    pub fn new(
        name: impl Into<String>,
        style: impl Into<String>,
        material: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            material: material.into(),
            price,
        }
    }
}
