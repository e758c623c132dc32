use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Strings and characters need at least one character to draw from.
    #[error("string character set must not be empty")]
    EmptyCharacterSet,
    /// Containers are drawn from `[1, max]`, so the bound must be positive.
    #[error("max collection size must be at least 1")]
    ZeroCollectionSize,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to encode settings: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Convenience alias for configuration results.
pub type Result<T> = std::result::Result<T, ConfigError>;
