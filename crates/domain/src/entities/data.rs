//! Data - Input record for the data processors

use serde::{Deserialize, Serialize};

/// A typed chunk of content handed to a data processor.
///
/// Processors only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    /// Type label (e.g., "Text", "Audio", "Video")
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl Data {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }
}
