//! Configuration validation utilities

use crate::schema::Settings;
use secrecy::ExposeSecret;
use types::{utils::has_scheme, LdapConfig};

/// Minimum secret key length expected in production
const MIN_SECRET_KEY_LEN: usize = 32;

/// Settings validator
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate resolved settings
    pub fn validate(settings: &Settings) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::validate_mode(settings, &mut report);
        Self::validate_secret_key(settings, &mut report);
        Self::validate_allowed_hosts(settings, &mut report);
        Self::validate_namespace(settings, &mut report);
        Self::validate_database(settings, &mut report);
        Self::validate_search(settings, &mut report);

        if let Some(ldap) = settings.auth_backend.ldap() {
            Self::validate_ldap(ldap, &mut report);
        }

        report
    }

    fn validate_mode(settings: &Settings, report: &mut ValidationReport) {
        if settings.mode.is_production() && settings.debug {
            report.add_warning("debug", "Debug mode is enabled in production");
        }
    }

    fn validate_secret_key(settings: &Settings, report: &mut ValidationReport) {
        let key = settings.secret_key.expose_secret();
        if key.is_empty() {
            if settings.mode.is_production() {
                report.add_error("secret_key", "Secret key cannot be empty in production");
            } else {
                report.add_warning("secret_key", "No secret key configured");
            }
        } else if settings.mode.is_production() && key.len() < MIN_SECRET_KEY_LEN {
            report.add_warning(
                "secret_key",
                &format!("Secret key is shorter than {} characters", MIN_SECRET_KEY_LEN),
            );
        }
    }

    fn validate_allowed_hosts(settings: &Settings, report: &mut ValidationReport) {
        if settings.allowed_hosts.is_empty() {
            report.add_warning("allowed_hosts", "No allowed hosts configured, every request will be rejected");
        }

        if settings.allowed_hosts.iter().any(|h| h == "*") {
            report.add_warning("allowed_hosts", "Wildcard host accepts requests for any domain");
        }
    }

    fn validate_namespace(settings: &Settings, report: &mut ValidationReport) {
        let namespace = &settings.namespace_for_data_export;
        if !has_scheme(namespace, &["http", "https"]) {
            report.add_warning(
                "namespace_for_data_export",
                &format!("Namespace must be an http:// or https:// URI: {}", namespace),
            );
        } else if !namespace.ends_with('/') {
            report.add_warning(
                "namespace_for_data_export",
                "Namespace should end with '/' so identifiers can be appended",
            );
        }
    }

    fn validate_database(settings: &Settings, report: &mut ValidationReport) {
        if settings.database.name.is_empty() {
            report.add_error("database.name", "Database name cannot be empty");
        }

        if settings.database.host.is_empty() {
            report.add_error("database.host", "Database host cannot be empty");
        }

        if settings.database.port == 0 {
            report.add_error("database.port", "Database port cannot be 0");
        }

        if settings.couchdb.port == 0 {
            report.add_error("couchdb.port", "CouchDB port cannot be 0");
        }
    }

    fn validate_search(settings: &Settings, report: &mut ValidationReport) {
        if settings.search.http_port == 0 {
            report.add_error("search.http_port", "Search port cannot be 0");
        }

        if settings.search.hosts.iter().any(|h| h.host.is_empty()) {
            report.add_error("search.hosts", "Search host cannot be empty");
        }

        if settings.search.prefix.is_empty() {
            report.add_warning(
                "search.prefix",
                "Empty index prefix, indices may collide with other deployments",
            );
        }
    }

    fn validate_ldap(ldap: &LdapConfig, report: &mut ValidationReport) {
        if !has_scheme(&ldap.server_uri, &["ldap", "ldaps"]) {
            report.add_error(
                "ldap.server_uri",
                &format!("LDAP server URI must start with ldap:// or ldaps://: {}", ldap.server_uri),
            );
        }

        if ldap.user_search_base.is_empty() {
            report.add_error("ldap.user_search_base", "LDAP user search base cannot be empty");
        }

        if ldap.bind_dn.is_empty() {
            report.add_warning("ldap.bind_dn", "No bind DN configured, binding anonymously");
        }

        if ldap.start_tls && ldap.server_uri.starts_with("ldaps://") {
            report.add_warning("ldap.start_tls", "STARTTLS has no effect over ldaps://");
        }
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
