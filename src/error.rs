//! Error types for tinted

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Theme configuration errors
///
/// Raised while loading a theme, before anything on the display
/// surface is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("theme is missing required key `{0}`")]
    MissingKey(String),

    #[error("theme key `{key}` has invalid color value `{value}`")]
    InvalidColor { key: String, value: String },

    #[error("theme is not a valid TOML table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot read theme: {0}")]
    Io(#[from] std::io::Error),
}

/// Highlighting error types
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("settings store: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
