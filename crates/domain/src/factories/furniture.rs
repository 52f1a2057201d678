//! Furniture line factories: Modern Wood, Traditional Metal, Industrial Glass.
//!
//! Each line fixes a style and a material; pieces differ only in name and price.

use super::FurnitureFactory;
use crate::entities::Furniture;

fn piece(style: &str, material: &str, piece: &str, price: u32) -> Furniture {
    let name = format!("{style} {material} {piece}");
    Furniture::new(name, style, material, price)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModernWoodFactory;

impl FurnitureFactory for ModernWoodFactory {
    fn factory_id(&self) -> &'static str {
        "modern_wood"
    }

    fn create_chair(&self) -> Furniture {
        piece("Modern", "Wood", "Chair", 100)
    }

    fn create_table(&self) -> Furniture {
        piece("Modern", "Wood", "Table", 200)
    }

    fn create_sofa(&self) -> Furniture {
        piece("Modern", "Wood", "Sofa", 300)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraditionalMetalFactory;

impl FurnitureFactory for TraditionalMetalFactory {
    fn factory_id(&self) -> &'static str {
        "traditional_metal"
    }

    fn create_chair(&self) -> Furniture {
        piece("Traditional", "Metal", "Chair", 120)
    }

    fn create_table(&self) -> Furniture {
        piece("Traditional", "Metal", "Table", 220)
    }

    fn create_sofa(&self) -> Furniture {
        piece("Traditional", "Metal", "Sofa", 320)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndustrialGlassFactory;

impl FurnitureFactory for IndustrialGlassFactory {
    fn factory_id(&self) -> &'static str {
        "industrial_glass"
    }

    fn create_chair(&self) -> Furniture {
        piece("Industrial", "Glass", "Chair", 150)
    }

    fn create_table(&self) -> Furniture {
        piece("Industrial", "Glass", "Table", 250)
    }

    fn create_sofa(&self) -> Furniture {
        piece("Industrial", "Glass", "Sofa", 350)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_wood_table() {
        assert_eq!(
            ModernWoodFactory.create_table(),
            Furniture::new("Modern Wood Table", "Modern", "Wood", 200)
        );
    }

    #[test]
    fn prices_per_line() {
        let lines: [(&dyn FurnitureFactory, [u32; 3]); 3] = [
            (&ModernWoodFactory, [100, 200, 300]),
            (&TraditionalMetalFactory, [120, 220, 320]),
            (&IndustrialGlassFactory, [150, 250, 350]),
        ];
        for (factory, [chair, table, sofa]) in lines {
            assert_eq!(factory.create_chair().price, chair);
            assert_eq!(factory.create_table().price, table);
            assert_eq!(factory.create_sofa().price, sofa);
        }
    }

    #[test]
    fn pieces_share_style_and_material() {
        let factory = IndustrialGlassFactory;
        let pieces = [
            factory.create_chair(),
            factory.create_table(),
            factory.create_sofa(),
        ];
        for item in pieces {
            assert_eq!(item.style, "Industrial");
            assert_eq!(item.material, "Glass");
            assert!(item.name.starts_with("Industrial Glass "));
        }
        assert_eq!(
            TraditionalMetalFactory.create_sofa().name,
            "Traditional Metal Sofa"
        );
    }
}
