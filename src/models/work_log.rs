//! Work log models.
//!
//! A work log entry records the hours one employee worked on one date. Entries
//! arrive from the store in their wire shape (raw date text, floating-point
//! hours) and are validated when they are folded into payroll totals.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Identifier of a work log entry.
///
/// Stores hand out either integer or string identifiers; both forms are
/// accepted and both can be used as set or map keys.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LogId;
///
/// let numeric: LogId = serde_json::from_str("12").unwrap();
/// let text: LogId = serde_json::from_str("\"log-12\"").unwrap();
///
/// assert_eq!(numeric, LogId::Number(12));
/// assert_eq!(text.to_string(), "log-12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    /// An integer identifier (the store's autoincrement key).
    Number(i64),
    /// An opaque string identifier.
    Text(String),
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogId::Number(id) => write!(f, "{}", id),
            LogId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for LogId {
    fn from(id: i64) -> Self {
        LogId::Number(id)
    }
}

impl From<&str> for LogId {
    fn from(id: &str) -> Self {
        LogId::Text(id.to_string())
    }
}

/// A record of hours worked by one employee on one date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkLogEntry;
///
/// let json = r#"{
///     "id": 1,
///     "employee_id": 7,
///     "employee_name": "Asha Rai",
///     "date": "2024-03-04",
///     "hours": 8.0,
///     "is_paid": false
/// }"#;
///
/// let entry: WorkLogEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.employee_id, 7);
/// assert!(!entry.is_paid);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    /// Unique identifier of the entry.
    pub id: LogId,
    /// The employee who logged the work.
    pub employee_id: i64,
    /// Display name of the employee, supplied by the store.
    pub employee_name: String,
    /// Calendar date the work was performed, as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Hours worked.
    pub hours: f64,
    /// Whether this entry has been settled.
    #[serde(default)]
    pub is_paid: bool,
    /// Free-text note attached by an administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkLogEntry {
    /// Parses the entry's date.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEntry`] if the date is missing or is not
    /// a valid `YYYY-MM-DD` calendar date.
    pub fn work_date(&self) -> PayrollResult<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(self.invalid("missing date"));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| self.invalid(format!("malformed date '{}': {}", raw, e)))
    }

    /// Returns the entry's hours as an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEntry`] if the hours are NaN, infinite
    /// or negative.
    pub fn worked_hours(&self) -> PayrollResult<Decimal> {
        if !self.hours.is_finite() {
            return Err(self.invalid(format!("hours must be finite, got {}", self.hours)));
        }
        if self.hours < 0.0 {
            return Err(self.invalid(format!(
                "hours must not be negative, got {}",
                self.hours
            )));
        }

        Decimal::from_f64(self.hours)
            .ok_or_else(|| self.invalid(format!("hours out of range: {}", self.hours)))
    }

    fn invalid(&self, message: impl Into<String>) -> PayrollError {
        PayrollError::InvalidEntry {
            entry_id: self.id.to_string(),
            message: message.into(),
        }
    }
}

/// A work log submitted by an employee (or created for a taken shift).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkLog {
    /// The employee the hours belong to.
    pub employee_id: i64,
    /// Calendar date, as `YYYY-MM-DD`.
    pub date: String,
    /// Hours worked; the configured default shift length when absent.
    #[serde(default)]
    pub hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, hours: f64) -> WorkLogEntry {
        WorkLogEntry {
            id: LogId::Number(5),
            employee_id: 1,
            employee_name: "Asha Rai".to_string(),
            date: date.to_string(),
            hours,
            is_paid: false,
            notes: None,
        }
    }

    #[test]
    fn test_log_id_accepts_number_and_string() {
        let ids: Vec<LogId> = serde_json::from_str(r#"[3, "abc"]"#).unwrap();
        assert_eq!(ids, vec![LogId::Number(3), LogId::Text("abc".to_string())]);
    }

    #[test]
    fn test_log_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&LogId::Number(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&LogId::from("x9")).unwrap(), "\"x9\"");
    }

    #[test]
    fn test_work_date_parses_calendar_date() {
        let date = entry("2024-02-29", 8.0).work_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_work_date_missing_is_invalid() {
        match entry("  ", 8.0).work_date() {
            Err(PayrollError::InvalidEntry { entry_id, message }) => {
                assert_eq!(entry_id, "5");
                assert_eq!(message, "missing date");
            }
            other => panic!("Expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_work_date_malformed_is_invalid() {
        let result = entry("2023-02-29", 8.0).work_date();
        assert!(matches!(result, Err(PayrollError::InvalidEntry { .. })));

        let result = entry("04/03/2024", 8.0).work_date();
        assert!(matches!(result, Err(PayrollError::InvalidEntry { .. })));
    }

    #[test]
    fn test_worked_hours_converts_exactly() {
        assert_eq!(entry("2024-03-04", 7.5).worked_hours().unwrap(), Decimal::new(75, 1));
        assert_eq!(entry("2024-03-04", 0.0).worked_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_worked_hours_rejects_negative_and_non_finite() {
        for hours in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = entry("2024-03-04", hours).worked_hours();
            assert!(
                matches!(result, Err(PayrollError::InvalidEntry { .. })),
                "hours {} should be rejected",
                hours
            );
        }
    }

    #[test]
    fn test_entry_without_date_deserializes() {
        let json = r#"{"id": "a1", "employee_id": 2, "employee_name": "Bo", "hours": 4}"#;
        let entry: WorkLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, "");
        assert!(entry.work_date().is_err());
    }

    #[test]
    fn test_new_work_log_hours_optional() {
        let log: NewWorkLog =
            serde_json::from_str(r#"{"employee_id": 3, "date": "2024-05-06"}"#).unwrap();
        assert_eq!(log.hours, None);
    }
}
