//! Required/optional variable lookup and typed readers

use crate::env::EnvSource;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;
use types::{ConfigError, Result};

/// Typed reader over an environment snapshot.
///
/// Lookups are logged by name only; values are never logged.
pub struct Resolver<'a, E: EnvSource + ?Sized> {
    env: &'a E,
}

impl<'a, E: EnvSource + ?Sized> Resolver<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// Value of a required variable, unmodified
    pub fn require(&self, name: &str) -> Result<String> {
        match self.env.get_var(name) {
            Some(value) => {
                debug!(variable = name, "Resolved required setting");
                Ok(value)
            }
            None => Err(ConfigError::missing(name)),
        }
    }

    /// Value of an optional variable, or `default` when absent
    pub fn optional(&self, name: &str, default: &str) -> String {
        self.env.get_var(name).unwrap_or_else(|| {
            debug!(variable = name, "Optional setting absent, using default");
            default.to_string()
        })
    }

    /// Non-empty value of an optional variable, or `fallback`
    pub fn optional_override(&self, name: &str, fallback: &str) -> String {
        match self.env.get_var(name) {
            Some(value) if !value.is_empty() => {
                debug!(variable = name, "Override applied");
                value
            }
            _ => fallback.to_string(),
        }
    }

    /// Required boolean literal
    pub fn require_bool(&self, name: &str) -> Result<bool> {
        parse_bool(name, &self.require(name)?)
    }

    /// Optional boolean literal, `default` when absent
    pub fn optional_bool(&self, name: &str, default: bool) -> Result<bool> {
        match self.env.get_var(name) {
            Some(value) => parse_bool(name, &value),
            None => Ok(default),
        }
    }

    /// Required decimal integer
    pub fn require_int<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        parse_int(name, &self.require(name)?)
    }

    /// Required TCP port
    pub fn require_port(&self, name: &str) -> Result<u16> {
        self.require_int(name)
    }

    /// Required whitespace-separated list
    pub fn require_list(&self, name: &str) -> Result<Vec<String>> {
        Ok(split_list(&self.require(name)?))
    }
}

/// Parse a boolean literal.
///
/// Accepts `True`/`False` in any case, `1`/`0`, `yes`/`no` and `on`/`off`.
pub fn parse_bool(name: &str, text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            name: name.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Parse decimal text into an integer type
pub fn parse_int<T>(name: &str, text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.trim().parse::<T>().map_err(|e| {
        debug!(variable = name, error = %e, "Integer parse failed");
        ConfigError::InvalidInteger {
            name: name.to_string(),
            value: text.to_string(),
        }
    })
}

/// Split whitespace-delimited text, preserving order
pub fn split_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;

    fn env() -> Environment {
        Environment::from_pairs([
            ("DJANGO_DEBUG", "True"),
            ("ESPORT", "9200"),
            ("PGPORT", " 5432 "),
            ("BAD_PORT", "abc"),
            ("BIG_PORT", "70000"),
            ("DOMAIN_NAMES", "a.example.com b.example.com"),
            ("EMPTY", ""),
            ("PADDED", "  keep me  "),
        ])
    }

    #[test]
    fn test_require_returns_value_unmodified() {
        let env = env();
        let r = Resolver::new(&env);
        assert_eq!(r.require("PADDED").unwrap(), "  keep me  ");
        assert_eq!(r.require("EMPTY").unwrap(), "");
    }

    #[test]
    fn test_require_missing_names_variable() {
        let env = env();
        let err = Resolver::new(&env).require("PGHOST").unwrap_err();
        assert_eq!(err, ConfigError::missing("PGHOST"));
        assert!(err.to_string().contains("PGHOST"));
    }

    #[test]
    fn test_optional_uses_default() {
        let env = env();
        let r = Resolver::new(&env);
        assert_eq!(r.optional("DJANGO_SECRET_KEY", ""), "");
        assert_eq!(r.optional("DJANGO_SECRET_KEY", "fallback"), "fallback");
        assert_eq!(r.optional("EMPTY", "fallback"), "");
        assert_eq!(r.optional("ESPORT", "fallback"), "9200");
    }

    #[test]
    fn test_optional_override_ignores_empty() {
        let env = env();
        let r = Resolver::new(&env);
        assert_eq!(r.optional_override("EMPTY", "arches"), "arches");
        assert_eq!(r.optional_override("MISSING", "arches"), "arches");
        assert_eq!(r.optional_override("ESPORT", "arches"), "9200");
    }

    #[test]
    fn test_bool_reader() {
        assert!(parse_bool("X", "True").unwrap());
        assert!(!parse_bool("X", "False").unwrap());
        assert!(parse_bool("X", "true").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", " on ").unwrap());
        assert_eq!(
            parse_bool("X", "maybe").unwrap_err(),
            ConfigError::InvalidBoolean {
                name: "X".to_string(),
                value: "maybe".to_string()
            }
        );
        assert!(parse_bool("X", "").is_err());
    }

    #[test]
    fn test_optional_bool() {
        let env = env();
        let r = Resolver::new(&env);
        assert!(r.optional_bool("DJANGO_DEBUG", false).unwrap());
        assert!(!r.optional_bool("LDAP_ENABLED", false).unwrap());
        assert!(r.optional_bool("ESPORT", false).is_err());
        assert!(r.require_bool("DJANGO_DEBUG").unwrap());
        assert!(r.require_bool("LDAP_ENABLED").is_err());
    }

    #[test]
    fn test_integer_reader() {
        let env = env();
        let r = Resolver::new(&env);
        assert_eq!(r.require_int::<i64>("ESPORT").unwrap(), 9200);
        assert_eq!(r.require_port("PGPORT").unwrap(), 5432);
        assert!(matches!(
            r.require_port("BAD_PORT"),
            Err(ConfigError::InvalidInteger { .. })
        ));
        assert!(r.require_port("BIG_PORT").is_err());
        assert_eq!(r.require_int::<u32>("BIG_PORT").unwrap(), 70000);
        assert_eq!(parse_int::<i64>("X", "abc").unwrap_err().subject(), Some("X"));
    }

    #[test]
    fn test_list_reader() {
        assert_eq!(
            split_list("a.example.com b.example.com"),
            vec!["a.example.com".to_string(), "b.example.com".to_string()]
        );
        assert!(split_list("").is_empty());
        assert_eq!(split_list("  one\ttwo\n"), vec!["one", "two"]);

        let env = env();
        let r = Resolver::new(&env);
        assert_eq!(r.require_list("DOMAIN_NAMES").unwrap().len(), 2);
        assert!(r.require_list("EMPTY").unwrap().is_empty());
    }
}
