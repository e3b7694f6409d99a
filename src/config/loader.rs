//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```text
/// hourly_rate: "20.00"
/// default_shift_hours: "7"
/// currency_symbol: "$"
/// recent_hours_window_days: 7
/// server:
///   bind_address: "0.0.0.0:5000"
/// accounts:
///   admin_username: "admin"
///   admin_password: "admin123"
///   default_employee_password: "password123"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Hourly rate: {}", loader.hourly_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a required field
    ///   (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.config.hourly_rate
    }

    /// Returns the default shift length in hours.
    pub fn default_shift_hours(&self) -> Decimal {
        self.config.default_shift_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config_path() -> &'static str {
        DEFAULT_CONFIG_PATH
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.hourly_rate(), dec("20.00"));
        assert_eq!(loader.default_shift_hours(), dec("7"));
        assert_eq!(loader.config().accounts.admin_username, "admin");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/payroll.yaml") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_yaml_returns_error() {
        match ConfigLoader::parse("hourly_rate: [unclosed", "inline") {
            Err(PayrollError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_rate_returns_error() {
        assert!(matches!(
            ConfigLoader::parse("currency_symbol: \"$\"", "inline"),
            Err(PayrollError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive_rate() {
        assert!(matches!(
            ConfigLoader::parse("hourly_rate: \"0\"", "inline"),
            Err(PayrollError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_parse_overrides() {
        let yaml = r#"
hourly_rate: "25.50"
default_shift_hours: "8"
recent_hours_window_days: 14
server:
  bind_address: "127.0.0.1:8080"
"#;
        let loader = ConfigLoader::parse(yaml, "inline").unwrap();
        assert_eq!(loader.hourly_rate(), dec("25.50"));
        assert_eq!(loader.default_shift_hours(), dec("8"));
        assert_eq!(loader.config().recent_hours_window_days, 14);
        assert_eq!(loader.config().server.bind_address, "127.0.0.1:8080");
    }
}
