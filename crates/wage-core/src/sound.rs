use serde::{Deserialize, Serialize};

/// A named sound resource. Decoding and playback happen outside the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    /// Unique (case-insensitive) name.
    pub name: String,
    /// Encoded sample data.
    pub data: Vec<u8>,
}

impl Sound {
    /// Create a sound without sample data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }
}
