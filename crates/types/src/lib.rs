//! Shared types for the Arches settings resolver
//!
//! This crate contains the configuration error type and the resolved
//! descriptors handed to the rest of the application at startup.

pub mod auth;
pub mod database;
pub mod error;
pub mod mode;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthBackend, LdapConfig};
pub use database::{DatabaseSettings, DocumentStoreSettings};
pub use error::{ConfigError, Result};
pub use mode::Mode;
pub use search::{SearchHost, SearchSettings};
