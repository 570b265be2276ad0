//! Environment snapshot
//!
//! The resolver reads through [`EnvSource`] so that tests and tools can
//! resolve settings against an environment other than the live process.

use std::collections::BTreeMap;

/// Read-only source of environment variables
pub trait EnvSource {
    /// Value of `name`, or `None` if it is not set
    fn get_var(&self, name: &str) -> Option<String>;

    /// Whether `name` is set, even to an empty value
    fn contains(&self, name: &str) -> bool {
        self.get_var(name).is_some()
    }
}

/// Immutable snapshot of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Copy the current process environment.
    ///
    /// Pairs that are not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }
}

impl EnvSource for Environment {
    fn get_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
