//! Configuration schema definitions

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::{utils::serialize_redacted, AuthBackend, DatabaseSettings, DocumentStoreSettings, Mode, SearchSettings};

/// Settings that do not come from the environment.
///
/// Defaults can be overridden by a YAML file. The namespace, search prefix
/// and secret key here are fallbacks for the matching environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaticSettings {
    /// Namespace URI used when exporting data
    #[serde(default = "default_namespace")]
    pub namespace_for_data_export: String,
    /// Prefix applied to search index names
    #[serde(default = "default_elasticsearch_prefix")]
    pub elasticsearch_prefix: String,
    /// Secret key used when no override is set
    #[serde(default)]
    pub secret_key: String,
    /// Directory collected static files are served from
    #[serde(default = "default_static_root")]
    pub static_root: String,
    /// Application branding
    #[serde(default)]
    pub app: AppMetadata,
    /// Ontology loaded at install time
    #[serde(default)]
    pub ontology: OntologySettings,
    /// Fixed database parameters
    #[serde(default)]
    pub database: DatabaseDefaults,
    /// LDAP defaults, used only when the directory backend is enabled
    #[serde(default)]
    pub ldap: LdapDefaults,
}

/// Application branding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppMetadata {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_title")]
    pub title: String,
    #[serde(default)]
    pub copyright_text: String,
    #[serde(default = "default_copyright_year")]
    pub copyright_year: String,
}

/// Ontology files and namespace prefixes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OntologySettings {
    /// Directory holding the ontology files
    #[serde(default = "default_ontology_path")]
    pub path: String,
    /// Base ontology file
    #[serde(default = "default_ontology_base")]
    pub base: String,
    /// Display name of the base ontology
    #[serde(default = "default_ontology_base_name")]
    pub base_name: String,
    /// Extension files loaded on top of the base
    #[serde(default = "default_ontology_extensions")]
    pub extensions: Vec<String>,
    /// Namespace URI to prefix; an empty prefix is the default namespace
    #[serde(default = "default_ontology_namespaces")]
    pub namespaces: BTreeMap<String, String>,
}

/// Database parameters that are not deployment specific
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseDefaults {
    #[serde(default = "default_database_engine")]
    pub engine: String,
    #[serde(default = "default_postgis_template")]
    pub postgis_template: String,
}

/// LDAP values with a fixed fallback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LdapDefaults {
    /// Search filter used when `AUTH_LDAP_USER_SEARCH_FILTER` is absent
    #[serde(default = "default_ldap_user_search_filter")]
    pub user_search_filter: String,
    /// User model attribute to directory attribute
    #[serde(default = "default_ldap_user_attr_map")]
    pub user_attr_map: BTreeMap<String, String>,
}

/// Fully resolved settings.
///
/// Built once at startup and passed to every component that needs it.
#[derive(Debug, Serialize)]
pub struct Settings {
    pub mode: Mode,
    pub debug: bool,
    #[serde(serialize_with = "serialize_redacted")]
    pub secret_key: SecretString,
    pub allowed_hosts: Vec<String>,
    pub namespace_for_data_export: String,
    pub database: DatabaseSettings,
    pub couchdb: DocumentStoreSettings,
    pub search: SearchSettings,
    pub auth_backend: AuthBackend,
    pub static_root: String,
    pub app: AppMetadata,
    pub ontology: OntologySettings,
}

impl Settings {
    /// Ordered authentication backends for this deployment
    pub fn authentication_backends(&self) -> Vec<&'static str> {
        self.auth_backend.backend_chain()
    }
}

// Default value functions
fn default_namespace() -> String {
    "http://localhost:8000/".to_string()
}

fn default_elasticsearch_prefix() -> String {
    "arches".to_string()
}

fn default_static_root() -> String {
    "/static_root".to_string()
}

fn default_app_name() -> String {
    "AATA".to_string()
}

fn default_app_title() -> String {
    "AATA | Arches".to_string()
}

fn default_copyright_year() -> String {
    "2019".to_string()
}

fn default_ontology_path() -> String {
    "ontology/linked_art".to_string()
}

fn default_ontology_base() -> String {
    "cidoc_crm_v6.2.4.xml".to_string()
}

fn default_ontology_base_name() -> String {
    "Linked Art".to_string()
}

fn default_ontology_extensions() -> Vec<String> {
    vec![
        "linkedart.xml".to_string(),
        "linkedart_crm_enhancements.xml".to_string(),
    ]
}

fn default_ontology_namespaces() -> BTreeMap<String, String> {
    [
        ("http://purl.org/dc/terms/", "dcterms"),
        ("http://purl.org/dc/elements/1.1/", "dc"),
        ("http://schema.org/", "schema"),
        ("http://www.w3.org/2004/02/skos/core#", "skos"),
        ("http://www.w3.org/2000/01/rdf-schema#", "rdfs"),
        ("http://xmlns.com/foaf/0.1/", "foaf"),
        ("http://www.w3.org/2001/XMLSchema#", "xsd"),
        ("https://linked.art/ns/terms/", "la"),
        ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf"),
        ("http://www.cidoc-crm.org/cidoc-crm/", ""),
        ("http://www.ics.forth.gr/isl/CRMgeo/", "geo"),
        ("http://www.ics.forth.gr/isl/CRMsci/", "sci"),
    ]
    .into_iter()
    .map(|(uri, prefix)| (uri.to_string(), prefix.to_string()))
    .collect()
}

fn default_database_engine() -> String {
    "django.contrib.gis.db.backends.postgis".to_string()
}

fn default_postgis_template() -> String {
    "template_postgis_20".to_string()
}

fn default_ldap_user_search_filter() -> String {
    "(uid=%(user)s)".to_string()
}

fn default_ldap_user_attr_map() -> BTreeMap<String, String> {
    [
        ("first_name", "givenName"),
        ("last_name", "sn"),
        ("email", "mail"),
    ]
    .into_iter()
    .map(|(attr, ldap)| (attr.to_string(), ldap.to_string()))
    .collect()
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            namespace_for_data_export: default_namespace(),
            elasticsearch_prefix: default_elasticsearch_prefix(),
            secret_key: String::new(),
            static_root: default_static_root(),
            app: AppMetadata::default(),
            ontology: OntologySettings::default(),
            database: DatabaseDefaults::default(),
            ldap: LdapDefaults::default(),
        }
    }
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            title: default_app_title(),
            copyright_text: String::new(),
            copyright_year: default_copyright_year(),
        }
    }
}

impl Default for OntologySettings {
    fn default() -> Self {
        Self {
            path: default_ontology_path(),
            base: default_ontology_base(),
            base_name: default_ontology_base_name(),
            extensions: default_ontology_extensions(),
            namespaces: default_ontology_namespaces(),
        }
    }
}

impl Default for DatabaseDefaults {
    fn default() -> Self {
        Self {
            engine: default_database_engine(),
            postgis_template: default_postgis_template(),
        }
    }
}

impl Default for LdapDefaults {
    fn default() -> Self {
        Self {
            user_search_filter: default_ldap_user_search_filter(),
            user_attr_map: default_ldap_user_attr_map(),
        }
    }
}
