//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the aggregator, the store and the service can report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every error names the entry, bucket, employee or request it concerns so
/// that a caller can report it without further lookups.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidEntry {
///     entry_id: "42".to_string(),
///     message: "hours must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid work log entry '42': hours must not be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A work log entry could not be aggregated.
    #[error("Invalid work log entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the offending entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A configuration value (such as the hourly rate) is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the invalid value.
        message: String,
    },

    /// Batch pay was requested for a week that has no unpaid entries.
    #[error("Nothing to pay for employee {employee_id} in week starting {week_start}")]
    NothingToPay {
        /// The employee the bucket belongs to.
        employee_id: i64,
        /// The Monday the bucket starts on.
        week_start: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the given ID.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        employee_id: i64,
    },

    /// An employee record was missing a required field or was otherwise invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No work log exists with the given ID.
    #[error("Work log not found: {log_id}")]
    LogNotFound {
        /// The work log ID that was not found.
        log_id: String,
    },

    /// A batch pay request listed no work logs.
    #[error("No log IDs provided")]
    EmptyBatch,

    /// No week bucket exists for the given employee and week.
    #[error("No payroll week for employee {employee_id} starting {week_start}")]
    WeekNotFound {
        /// The employee ID.
        employee_id: i64,
        /// The requested week start.
        week_start: NaiveDate,
    },

    /// The supplied username and password did not match an account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The shift request is already taken or does not exist.
    #[error("Shift request {request_id} already taken or not found")]
    ShiftUnavailable {
        /// The shift request ID.
        request_id: i64,
    },

    /// An employee tried to take their own shift request.
    #[error("Shift request {request_id} belongs to the requesting employee")]
    OwnShiftRequest {
        /// The shift request ID.
        request_id: i64,
    },

    /// The session is not linked to an employee record.
    #[error("Session is not linked to an employee")]
    NotAnEmployee,

    /// The backing store could not be accessed.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
