//! Configuration loading for the charge service.
//!
//! This module loads the service configuration from a YAML file: the
//! listen address and the default timezone shifts are read in. Rates are
//! fixed and are not part of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use sitter_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, parse_timezone};
pub use types::{CalendarConfig, ServerConfig, ServiceConfig};
