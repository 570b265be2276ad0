//! Deployment mode

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment mode of the application.
///
/// `DEV` installs pull in extra development dependencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Production deployment
    Prod,
    /// Development deployment
    Dev,
}

impl Mode {
    /// Whether this is a production deployment
    pub fn is_production(self) -> bool {
        matches!(self, Mode::Prod)
    }

    /// Canonical textual form
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Prod => "PROD",
            Mode::Dev => "DEV",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROD" => Ok(Mode::Prod),
            "DEV" => Ok(Mode::Dev),
            _ => Err(ConfigError::InvalidValue {
                name: "mode".to_string(),
                value: s.to_string(),
                message: "expected PROD or DEV".to_string(),
            }),
        }
    }
}
