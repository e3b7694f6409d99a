//! Configuration types for the payroll engine.
//!
//! These types mirror the structure of the YAML configuration file and are
//! deserialized directly from it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::validate_hourly_rate;
use crate::error::{PayrollError, PayrollResult};

/// Top-level payroll configuration, loaded from `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Currency units paid per hour worked.
    pub hourly_rate: Decimal,
    /// Hours recorded when a work log omits them, and for taken shifts.
    #[serde(default = "default_shift_hours")]
    pub default_shift_hours: Decimal,
    /// Symbol prefixed to money amounts in log output.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Length of the dashboard's "hours this week" window, in days.
    #[serde(default = "default_recent_hours_window_days")]
    pub recent_hours_window_days: u32,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Login account settings.
    #[serde(default)]
    pub accounts: AccountsConfig,
}

fn default_shift_hours() -> Decimal {
    Decimal::new(7, 0)
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_recent_hours_window_days() -> u32 {
    7
}

impl PayrollConfig {
    /// Checks the values that the calculations depend on.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`] if the hourly rate or the
    /// default shift length is not positive.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_hourly_rate(self.hourly_rate)?;

        if self.default_shift_hours <= Decimal::ZERO {
            return Err(PayrollError::InvalidConfig {
                message: format!(
                    "default shift hours must be positive, got {}",
                    self.default_shift_hours
                ),
            });
        }

        Ok(())
    }

    /// Formats an amount with the configured currency symbol and two decimals.
    ///
    /// Half-cent amounts round away from zero.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::PayrollConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = PayrollConfig::default();
    /// assert_eq!(config.format_money(Decimal::new(160, 0)), "$160.00");
    /// ```
    pub fn format_money(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.currency_symbol, rounded)
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            hourly_rate: Decimal::new(20, 0),
            default_shift_hours: default_shift_hours(),
            currency_symbol: default_currency_symbol(),
            recent_hours_window_days: default_recent_hours_window_days(),
            server: ServerConfig::default(),
            accounts: AccountsConfig::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Login account settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Username of the seeded administrator account.
    pub admin_username: String,
    /// Password of the seeded administrator account.
    pub admin_password: String,
    /// Initial password given to new employee accounts.
    pub default_employee_password: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            default_employee_password: "password123".to_string(),
        }
    }
}
