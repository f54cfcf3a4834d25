//! Error types for Sparkle

use thiserror::Error;

/// The main error type for Sparkle operations
#[derive(Debug, Error)]
pub enum SparkleError {
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid field type: {field} expected {expected}")]
    InvalidFieldType { field: String, expected: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Sparkle operations
pub type Result<T> = std::result::Result<T, SparkleError>;

impl From<toml::de::Error> for SparkleError {
    fn from(err: toml::de::Error) -> Self {
        SparkleError::TomlParseError(err.to_string())
    }
}
