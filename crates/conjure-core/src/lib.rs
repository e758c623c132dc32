//! Configuration contracts for Conjure.
//!
//! This crate defines the immutable generation settings, the custom
//! creator registry, and the TOML settings layer shared by the engine and
//! its callers.

pub mod config;
pub mod creators;
pub mod error;
pub mod settings;

pub use config::{Config, ConfigBuilder};
pub use creators::{CreatorFn, CreatorRequest, CustomCreators};
pub use error::{ConfigError, Result};
pub use settings::Settings;

/// Exact length of generated strings unless configured otherwise.
pub const DEFAULT_STRING_LENGTH: usize = 20;

/// Inclusive upper bound on generated container sizes.
pub const DEFAULT_MAX_COLLECTION_SIZE: usize = 10;

/// Character domain for generated strings and characters.
pub fn default_string_characters() -> Vec<char> {
    ('A'..='Z').chain('a'..='z').chain(std::iter::once(' ')).collect()
}
