//! Error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
///
/// Creation itself never fails; errors only arise when selecting a family by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A family name did not match any known variant
    #[error("Unknown {family}: {name:?}")]
    UnknownFamily { family: &'static str, name: String },
}

impl DomainError {
    /// Create an unknown family error
    pub fn unknown_family(family: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownFamily {
            family,
            name: name.into(),
        }
    }
}
