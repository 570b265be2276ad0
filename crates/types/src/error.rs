//! Error types for the settings resolver

use thiserror::Error;

/// Configuration errors raised while resolving settings.
///
/// Every variant is fatal at startup: callers propagate it to the process
/// entry point instead of recovering locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is absent
    #[error("Set the {name} environment variable")]
    MissingVariable { name: String },

    /// Value is not a recognised boolean literal
    #[error("Invalid boolean value for {name}: {value:?} (expected True or False)")]
    InvalidBoolean { name: String, value: String },

    /// Value is not a decimal integer in range
    #[error("Invalid integer value for {name}: {value:?}")]
    InvalidInteger { name: String, value: String },

    /// Value does not satisfy the expected format
    #[error("Invalid value for {name}: {value:?}: {message}")]
    InvalidValue {
        name: String,
        value: String,
        message: String,
    },

    /// Static settings file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Static settings file could not be parsed
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Resolved settings failed validation
    #[error("Configuration validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Shorthand for a missing required variable
    pub fn missing(name: &str) -> Self {
        ConfigError::MissingVariable {
            name: name.to_string(),
        }
    }

    /// Name of the environment variable or settings field this error refers to
    pub fn subject(&self) -> Option<&str> {
        match self {
            ConfigError::MissingVariable { name }
            | ConfigError::InvalidBoolean { name, .. }
            | ConfigError::InvalidInteger { name, .. }
            | ConfigError::InvalidValue { name, .. } => Some(name),
            ConfigError::ValidationError { field, .. } => Some(field),
            ConfigError::FileNotFound { .. } | ConfigError::ParseError(_) => None,
        }
    }
}

/// Result type alias for settings resolution
pub type Result<T> = std::result::Result<T, ConfigError>;
