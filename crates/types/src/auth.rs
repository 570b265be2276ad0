//! Authentication backend selection

use crate::utils::serialize_redacted;
use secrecy::SecretString;
use serde::Serialize;
use std::collections::BTreeMap;

/// Backend authenticating against the local user table
pub const MODEL_BACKEND: &str = "django.contrib.auth.backends.ModelBackend";
/// Backend authenticating against an LDAP directory
pub const LDAP_BACKEND: &str = "django_auth_ldap.backend.LDAPBackend";

/// Directory service connection and user mapping
#[derive(Debug, Serialize)]
pub struct LdapConfig {
    /// Directory server URI (`ldap://` or `ldaps://`)
    pub server_uri: String,
    /// DN used to bind; empty for anonymous bind
    pub bind_dn: String,
    /// Password for `bind_dn`
    #[serde(serialize_with = "serialize_redacted")]
    pub bind_password: SecretString,
    /// Base DN for user searches
    pub user_search_base: String,
    /// Search filter; `%(user)s` is replaced with the login name
    pub user_search_filter: String,
    /// Upgrade the connection with STARTTLS
    pub start_tls: bool,
    /// User model attribute to directory attribute
    pub user_attr_map: BTreeMap<String, String>,
}

/// Authentication backend configured for this deployment
#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "config", rename_all = "lowercase")]
pub enum AuthBackend {
    /// Local accounts only
    None,
    /// Directory service in front of local accounts
    Ldap(LdapConfig),
}

impl AuthBackend {
    /// Whether the directory backend is enabled
    pub fn is_ldap(&self) -> bool {
        matches!(self, AuthBackend::Ldap(_))
    }

    /// Directory configuration, if enabled
    pub fn ldap(&self) -> Option<&LdapConfig> {
        match self {
            AuthBackend::Ldap(config) => Some(config),
            AuthBackend::None => None,
        }
    }

    /// Ordered authentication backends, tried first to last
    pub fn backend_chain(&self) -> Vec<&'static str> {
        match self {
            AuthBackend::None => vec![MODEL_BACKEND],
            AuthBackend::Ldap(_) => vec![LDAP_BACKEND, MODEL_BACKEND],
        }
    }
}

impl Default for AuthBackend {
    fn default() -> Self {
        AuthBackend::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ldap() -> LdapConfig {
        LdapConfig {
            server_uri: "ldap://dir.example.com".to_string(),
            bind_dn: "cn=reader,dc=example,dc=com".to_string(),
            bind_password: SecretString::from("s3cret".to_string()),
            user_search_base: "ou=people,dc=example,dc=com".to_string(),
            user_search_filter: "(uid=%(user)s)".to_string(),
            start_tls: false,
            user_attr_map: BTreeMap::from([("email".to_string(), "mail".to_string())]),
        }
    }

    #[test]
    fn test_backend_chain() {
        assert_eq!(AuthBackend::None.backend_chain(), vec![MODEL_BACKEND]);
        assert_eq!(
            AuthBackend::Ldap(ldap()).backend_chain(),
            vec![LDAP_BACKEND, MODEL_BACKEND]
        );
    }

    #[test]
    fn test_ldap_accessors() {
        assert!(!AuthBackend::default().is_ldap());
        assert!(AuthBackend::default().ldap().is_none());

        let backend = AuthBackend::Ldap(ldap());
        assert!(backend.is_ldap());
        assert_eq!(backend.ldap().unwrap().server_uri, "ldap://dir.example.com");
    }

    #[test]
    fn test_serialization_redacts_bind_password() {
        let json = serde_json::to_value(AuthBackend::Ldap(ldap())).unwrap();
        assert_eq!(json["kind"], "ldap");
        assert_eq!(json["config"]["bind_password"], crate::utils::REDACTED);
        assert_eq!(json["config"]["user_attr_map"]["email"], "mail");

        let json = serde_json::to_value(AuthBackend::None).unwrap();
        assert_eq!(json["kind"], "none");
    }
}
