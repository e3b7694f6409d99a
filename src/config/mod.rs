//! Configuration loading and management for the payroll engine.
//!
//! This module loads the payroll configuration (hourly rate, default shift
//! length, server address and seeded accounts) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Paying {} per hour", config.hourly_rate());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AccountsConfig, PayrollConfig, ServerConfig};
