use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{DEFAULT_MAX_COLLECTION_SIZE, DEFAULT_STRING_LENGTH, default_string_characters};

/// Serializable generation settings, typically kept in a `conjure.toml`.
///
/// Every key is optional; missing keys take the documented defaults.
/// Custom creators are code and cannot be expressed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub minimal: bool,
    pub string_length: usize,
    pub string_characters: String,
    pub max_collection_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimal: false,
            string_length: DEFAULT_STRING_LENGTH,
            string_characters: default_string_characters().into_iter().collect(),
            max_collection_size: DEFAULT_MAX_COLLECTION_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
