//! FurnitureCreator - Forwards catalog requests to the selected furniture line

use std::sync::Arc;

use crate::entities::Furniture;
use crate::factories::FurnitureFactory;
use crate::families::FurniturePiece;

/// Holds at most one furniture factory and delegates to it.
#[derive(Default)]
pub struct FurnitureCreator {
    factory: Option<Arc<dyn FurnitureFactory>>,
}

impl FurnitureCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current factory.
    pub fn set_factory<F>(&mut self, factory: F)
    where
        F: FurnitureFactory + 'static,
    {
        self.set_shared_factory(Arc::new(factory));
    }

    pub fn set_shared_factory(&mut self, factory: Arc<dyn FurnitureFactory>) {
        tracing::debug!(factory = factory.factory_id(), "Furniture factory assigned");
        self.factory = Some(factory);
    }

    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    pub fn factory_id(&self) -> Option<&'static str> {
        self.factory.as_ref().map(|f| f.factory_id())
    }

    pub fn create_chair(&self) -> Option<Furniture> {
        self.create(FurniturePiece::Chair)
    }

    pub fn create_table(&self) -> Option<Furniture> {
        self.create(FurniturePiece::Table)
    }

    pub fn create_sofa(&self) -> Option<Furniture> {
        self.create(FurniturePiece::Sofa)
    }

    /// Build the given piece with the current factory, or `None` if unassigned.
    pub fn create(&self, piece: FurniturePiece) -> Option<Furniture> {
        let Some(factory) = &self.factory else {
            tracing::debug!(%piece, "No furniture factory assigned, skipping creation");
            return None;
        };
        tracing::trace!(factory = factory.factory_id(), %piece, "Creating furniture");
        Some(piece.build(factory.as_ref()))
    }
}
