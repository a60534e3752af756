//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// The configuration file looks like:
/// ```text
/// server:
///   bind_address: "127.0.0.1:3000"
/// calendar:
///   timezone: "America/New_York"
/// ```
///
/// # Example
///
/// ```no_run
/// use sitter_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Shifts are read in {}", loader.timezone());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
    timezone: Tz,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing a required field (`ConfigParseError`)
    /// - The calendar timezone is not a known IANA name (`UnknownTimezone`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&path_str, &content)
    }

    /// Parses configuration from YAML text.
    ///
    /// `source` names where the text came from and is used in parse errors.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_engine::config::ConfigLoader;
    ///
    /// let yaml = "calendar:\n  timezone: \"America/Chicago\"\n";
    /// let loader = ConfigLoader::from_yaml_str("inline", yaml)?;
    /// assert_eq!(loader.timezone().name(), "America/Chicago");
    /// assert_eq!(loader.bind_address(), "127.0.0.1:3000");
    /// # Ok::<(), sitter_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(source: &str, content: &str) -> EngineResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let timezone = parse_timezone(&config.calendar.timezone)?;

        Ok(Self { config, timezone })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the default timezone for shifts.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the socket address the service listens on.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }
}

/// Parses an IANA timezone name.
///
/// # Example
///
/// ```
/// use sitter_engine::config::parse_timezone;
///
/// assert!(parse_timezone("Europe/London").is_ok());
/// assert!(parse_timezone("Mars/Olympus_Mons").is_err());
/// ```
pub fn parse_timezone(name: &str) -> EngineResult<Tz> {
    Tz::from_str(name).map_err(|_| EngineError::UnknownTimezone {
        name: name.to_string(),
    })
}
