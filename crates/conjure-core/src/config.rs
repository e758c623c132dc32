use rand::RngCore;

use crate::creators::{CreatorRequest, CustomCreators};
use crate::error::{ConfigError, Result};
use crate::settings::Settings;
use crate::{DEFAULT_MAX_COLLECTION_SIZE, DEFAULT_STRING_LENGTH, default_string_characters};

/// Immutable settings bundle controlling generation.
///
/// Built once through [`ConfigBuilder`] and never changed afterwards, so a
/// single engine always runs in exactly one of the normal or minimal modes.
#[derive(Debug, Clone)]
pub struct Config {
    minimal: bool,
    string_length: usize,
    string_characters: Vec<char>,
    max_collection_size: usize,
    creators: CustomCreators,
    seed: Option<u64>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default configuration with minimal mode switched on.
    pub fn minimal() -> Self {
        Self {
            minimal: true,
            ..Self::default()
        }
    }

    /// Minimal mode: nullable fields are null, defaulted fields keep their
    /// default, strings and containers are empty.
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    pub fn string_length(&self) -> usize {
        self.string_length
    }

    /// Non-empty character domain for strings and characters.
    pub fn string_characters(&self) -> &[char] {
        &self.string_characters
    }

    /// Inclusive upper bound on container sizes; always at least 1.
    pub fn max_collection_size(&self) -> usize {
        self.max_collection_size
    }

    pub fn creators(&self) -> &CustomCreators {
        &self.creators
    }

    /// Seed for a deterministic random source, if one was configured.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Serializable view of this configuration (creators are dropped).
    pub fn settings(&self) -> Settings {
        Settings {
            minimal: self.minimal,
            string_length: self.string_length,
            string_characters: self.string_characters.iter().collect(),
            max_collection_size: self.max_collection_size,
            seed: self.seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimal: false,
            string_length: DEFAULT_STRING_LENGTH,
            string_characters: default_string_characters(),
            max_collection_size: DEFAULT_MAX_COLLECTION_SIZE,
            creators: CustomCreators::new(),
            seed: None,
        }
    }
}

/// Builder for [`Config`]; `build` validates the collected options.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    minimal: bool,
    string_length: usize,
    string_characters: Vec<char>,
    max_collection_size: usize,
    creators: CustomCreators,
    seed: Option<u64>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl ConfigBuilder {
    /// Start from settings loaded from a file or string.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            minimal: settings.minimal,
            string_length: settings.string_length,
            string_characters: settings.string_characters.chars().collect(),
            max_collection_size: settings.max_collection_size,
            creators: CustomCreators::new(),
            seed: settings.seed,
        }
    }

    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn string_length(mut self, length: usize) -> Self {
        self.string_length = length;
        self
    }

    pub fn string_characters(mut self, characters: impl IntoIterator<Item = char>) -> Self {
        self.string_characters = characters.into_iter().collect();
        self
    }

    pub fn max_collection_size(mut self, size: usize) -> Self {
        self.max_collection_size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override generation for every occurrence of `T`.
    pub fn creator<T, F>(mut self, creator: F) -> Self
    where
        T: 'static,
        F: Fn(&mut CreatorRequest<'_>) -> T + Send + Sync + 'static,
    {
        self.creators.register(creator);
        self
    }

    /// Shorthand for a creator that ignores the request and only draws from
    /// the random source.
    pub fn creator_from_rng<T, F>(self, creator: F) -> Self
    where
        T: 'static,
        F: Fn(&mut dyn RngCore) -> T + Send + Sync + 'static,
    {
        self.creator(move |request: &mut CreatorRequest<'_>| creator(&mut *request.rng))
    }

    pub fn build(self) -> Result<Config> {
        if self.string_characters.is_empty() {
            return Err(ConfigError::EmptyCharacterSet);
        }
        if self.max_collection_size == 0 {
            return Err(ConfigError::ZeroCollectionSize);
        }

        Ok(Config {
            minimal: self.minimal,
            string_length: self.string_length,
            string_characters: self.string_characters,
            max_collection_size: self.max_collection_size,
            creators: self.creators,
            seed: self.seed,
        })
    }
}
