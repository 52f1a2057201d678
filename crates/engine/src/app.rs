//! Application state and composition.

use forgeworks_domain::FactoryRegistry;

use crate::config::DemoConfig;

/// Main application state.
///
/// Holds the factory registry and the demo configuration.
pub struct App {
    pub registry: FactoryRegistry,
    pub config: DemoConfig,
}

impl App {
    /// Compose the application with every built-in factory registered.
    pub fn new(config: DemoConfig) -> Self {
        Self::with_registry(FactoryRegistry::new(), config)
    }

    pub fn with_registry(registry: FactoryRegistry, config: DemoConfig) -> Self {
        Self { registry, config }
    }
}
