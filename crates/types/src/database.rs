//! Database and document store descriptors

use crate::utils::{credential_url, serialize_redacted};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Connection descriptor for the primary relational database
#[derive(Debug, Serialize)]
pub struct DatabaseSettings {
    /// Backend engine identifier handed to the web framework
    pub engine: String,
    /// Database name
    pub name: String,
    /// Login user
    pub user: String,
    /// Login password
    #[serde(serialize_with = "serialize_redacted")]
    pub password: SecretString,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Template used when creating spatial databases
    pub postgis_template: String,
}

impl DatabaseSettings {
    /// Connection URL with embedded credentials
    pub fn connection_url(&self) -> SecretString {
        let base = credential_url(
            "postgis",
            &self.user,
            self.password.expose_secret(),
            &self.host,
            self.port,
        );
        SecretString::from(format!("{}/{}", base, self.name))
    }
}

/// Connection descriptor for the CouchDB document store
#[derive(Debug, Serialize)]
pub struct DocumentStoreSettings {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Login user
    pub user: String,
    /// Full URL with embedded credentials
    #[serde(serialize_with = "serialize_redacted")]
    pub url: SecretString,
}

impl DocumentStoreSettings {
    /// Build the descriptor, composing the credential URL
    pub fn new(user: String, password: &str, host: String, port: u16) -> Self {
        let url = SecretString::from(credential_url("http", &user, password, &host, port));
        Self {
            host,
            port,
            user,
            url,
        }
    }
}
