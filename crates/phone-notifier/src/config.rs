//! Notifier configuration
//!
//! Loaded from TOML. Every key is optional; omitted keys take the defaults
//! below.
//!
//! ```toml
//! service_name = "phone-notifier"
//!
//! [registry]
//! address = "127.0.0.1:7070"
//! call_timeout_ms = 500
//! channel_capacity = 64
//!
//! [logging]
//! level = "info"
//! json = false
//! file_info = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{NotifierError, Result};

/// Top-level notifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Name stamped on every outbound notification
    pub service_name: String,
    pub registry: RegistryConfig,
    pub logging: LogSettings,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            service_name: "phone-notifier".to_string(),
            registry: RegistryConfig::default(),
            logging: LogSettings::default(),
        }
    }
}

/// Where and how to reach the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// `host:port` of the network registry
    pub address: String,
    /// Upper bound on a single registry call
    pub call_timeout_ms: u64,
    /// Buffer size for the in-process registry channel
    pub channel_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:7070".to_string(),
            call_timeout_ms: 500,
            channel_capacity: 64,
        }
    }
}

impl RegistryConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

/// Logging options as they appear in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub file_info: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_info: false,
        }
    }
}

impl NotifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: NotifierConfig = toml::from_str(contents)
            .map_err(|e| NotifierError::config(format!("Invalid notifier config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| NotifierError::config(format!("Failed to serialize config: {}", e)))
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn with_registry_address(mut self, address: impl Into<String>) -> Self {
        self.registry.address = address.into();
        self
    }

    pub fn with_call_timeout_ms(mut self, call_timeout_ms: u64) -> Self {
        self.registry.call_timeout_ms = call_timeout_ms;
        self
    }

    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.registry.channel_capacity = channel_capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(NotifierError::config("service_name must not be empty"));
        }
        if self.registry.address.trim().is_empty() {
            return Err(NotifierError::config("registry.address must not be empty"));
        }
        if self.registry.call_timeout_ms == 0 {
            return Err(NotifierError::config("registry.call_timeout_ms must be greater than zero"));
        }
        if self.registry.channel_capacity == 0 {
            return Err(NotifierError::config("registry.channel_capacity must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_omitted_keys() {
        let config = NotifierConfig::from_toml_str(
            r#"
            [registry]
            address = "192.168.1.10:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.service_name, "phone-notifier");
        assert_eq!(config.registry.address, "192.168.1.10:9000");
        assert_eq!(config.registry.call_timeout_ms, 500);
        assert_eq!(config.registry.channel_capacity, 64);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(NotifierConfig::from_toml_str("").unwrap(), NotifierConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NotifierConfig::new()
            .with_service_name("modem-1")
            .with_call_timeout_ms(1500)
            .with_channel_capacity(8);

        let text = config.to_toml_string().unwrap();
        assert_eq!(NotifierConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let err = NotifierConfig::from_toml_str(
            r#"
            [registry]
            call_timeout_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, NotifierError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_name = \"modem-2\"").unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();
        writeln!(file, "json = true").unwrap();

        let config = NotifierConfig::from_file(file.path()).unwrap();
        assert_eq!(config.service_name, "modem-2");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = NotifierConfig::from_file("/nonexistent/notifier.toml").unwrap_err();
        assert!(matches!(err, NotifierError::Io(_)));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(NotifierConfig::from_toml_str("service_name = ").is_err());
    }
}
