//! Configuration types for the charge service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The socket address the service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Civil calendar settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA name of the timezone shifts are read in when a request names none.
    pub timezone: String,
}

/// The complete service configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Civil calendar settings.
    pub calendar: CalendarConfig,
}
