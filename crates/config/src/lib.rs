//! Settings resolution for the Arches deployment
//!
//! This crate turns the process environment and an optional static settings
//! file into a single immutable [`Settings`] value. Missing or malformed
//! variables abort resolution with a [`types::ConfigError`].

pub mod env;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;
pub mod vars;

pub use env::{EnvSource, Environment};
pub use loader::SettingsLoader;
pub use resolver::{parse_bool, parse_int, split_list, Resolver};
pub use schema::*;
pub use validation::*;
