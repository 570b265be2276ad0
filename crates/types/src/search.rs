//! Search index descriptors

use serde::Serialize;

/// A single search cluster node
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchHost {
    /// Node host
    pub host: String,
    /// Node HTTP port
    pub port: u16,
}

/// Search index endpoint descriptor
#[derive(Debug, Clone, Serialize)]
pub struct SearchSettings {
    /// HTTP port shared by the configured nodes
    pub http_port: u16,
    /// Cluster nodes
    pub hosts: Vec<SearchHost>,
    /// Prefix applied to every index name
    pub prefix: String,
}

impl SearchSettings {
    /// Single-node cluster on the given host and port
    pub fn single(host: String, http_port: u16, prefix: String) -> Self {
        Self {
            http_port,
            hosts: vec![SearchHost {
                host,
                port: http_port,
            }],
            prefix,
        }
    }

    /// HTTP endpoints of all nodes
    pub fn endpoints(&self) -> Vec<String> {
        self.hosts
            .iter()
            .map(|h| format!("http://{}:{}", h.host, h.port))
            .collect()
    }
}
