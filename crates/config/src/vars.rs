//! Environment variable names consumed by the resolver

/// Deployment mode, `PROD` or `DEV`.
pub const DJANGO_MODE: &str = "DJANGO_MODE";
/// Debug flag, boolean literal.
pub const DJANGO_DEBUG: &str = "DJANGO_DEBUG";
/// Secret key override.
pub const DJANGO_SECRET_KEY: &str = "DJANGO_SECRET_KEY";
/// Whitespace-separated host names the application serves.
pub const DOMAIN_NAMES: &str = "DOMAIN_NAMES";
/// Namespace URI override for exported data.
pub const ARCHES_NAMESPACE_FOR_DATA_EXPORT: &str = "ARCHES_NAMESPACE_FOR_DATA_EXPORT";

pub const COUCHDB_USER: &str = "COUCHDB_USER";
pub const COUCHDB_PASS: &str = "COUCHDB_PASS";
pub const COUCHDB_HOST: &str = "COUCHDB_HOST";
pub const COUCHDB_PORT: &str = "COUCHDB_PORT";

pub const PGDBNAME: &str = "PGDBNAME";
pub const PGUSERNAME: &str = "PGUSERNAME";
pub const PGPASSWORD: &str = "PGPASSWORD";
pub const PGHOST: &str = "PGHOST";
pub const PGPORT: &str = "PGPORT";

pub const ESHOST: &str = "ESHOST";
pub const ESPORT: &str = "ESPORT";
/// Search index prefix override.
pub const ELASTICSEARCH_PREFIX: &str = "ELASTICSEARCH_PREFIX";

/// Gate for the LDAP block; nothing below it is read when false.
pub const LDAP_ENABLED: &str = "LDAP_ENABLED";
pub const AUTH_LDAP_SERVER_URI: &str = "AUTH_LDAP_SERVER_URI";
pub const AUTH_LDAP_BIND_DN: &str = "AUTH_LDAP_BIND_DN";
pub const AUTH_LDAP_BIND_PASSWORD: &str = "AUTH_LDAP_BIND_PASSWORD";
pub const AUTH_LDAP_USER_SEARCH_BASE: &str = "AUTH_LDAP_USER_SEARCH_BASE";
pub const AUTH_LDAP_USER_SEARCH_FILTER: &str = "AUTH_LDAP_USER_SEARCH_FILTER";
pub const AUTH_LDAP_START_TLS: &str = "AUTH_LDAP_START_TLS";

/// Variables that must be present for every deployment
pub const REQUIRED: &[&str] = &[
    DJANGO_MODE,
    DJANGO_DEBUG,
    COUCHDB_USER,
    COUCHDB_PASS,
    COUCHDB_HOST,
    COUCHDB_PORT,
    PGDBNAME,
    PGUSERNAME,
    PGPASSWORD,
    PGHOST,
    PGPORT,
    ESPORT,
    ESHOST,
    DOMAIN_NAMES,
];

/// Variables that must be present when `LDAP_ENABLED` is true
pub const REQUIRED_WITH_LDAP: &[&str] = &[AUTH_LDAP_SERVER_URI, AUTH_LDAP_USER_SEARCH_BASE];
