use std::io;

use thiserror::Error;

use crate::domain::template::SchemaError;

/// Library-wide error type for podsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template metadata violates the declared schema shape.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Template not found in the merged catalog.
    #[error("Template '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// Language string is not one of the supported set.
    #[error("Unknown language '{0}': must be one of nodejs, typescript, python, rust, shell")]
    UnknownLanguage(String),

    /// Complexity string is not one of the supported set.
    #[error("Unknown complexity '{0}': must be 'basic' or 'advanced'")]
    UnknownComplexity(String),

    /// A `--set` assignment could not be parsed.
    #[error("Invalid variable assignment '{0}': expected key=value")]
    InvalidAssignment(String),

    /// Variable values file could not be read or parsed.
    #[error("Failed to load values from {path}: {details}")]
    ValuesFile { path: String, details: String },

    /// Bundled template asset failed to parse (packaging bug).
    #[error("Invalid metadata for bundled template '{template}': {reason}")]
    InvalidTemplateMetadata { template: String, reason: String },

    /// TOML parsing error (podsmith.toml).
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Interaction or general validation failure.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
