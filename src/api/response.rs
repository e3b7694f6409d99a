//! Response types for the payroll API.
//!
//! This module defines the success bodies that are not plain domain types,
//! the error response structure, and the mapping from [`PayrollError`] to
//! HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{BatchPayConfirmation, LogId, WeekBucket};

/// Body returned after a work log is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogCreated {
    /// The new log's ID.
    pub id: LogId,
    /// Human-readable confirmation.
    pub message: String,
}

/// Body returned after a log's payment status is toggled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidToggled {
    /// The log's ID.
    pub id: i64,
    /// The new payment status.
    pub is_paid: bool,
    /// Human-readable confirmation.
    pub message: String,
}

/// Body returned after a week is paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayWeekResponse {
    /// What the store reported.
    #[serde(flatten)]
    pub confirmation: BatchPayConfirmation,
    /// The weekly summary after payment.
    pub weekly: Vec<WeekBucket>,
}

/// Body for operations that only report success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            PayrollError::InvalidEntry { .. } => (StatusCode::BAD_REQUEST, "INVALID_ENTRY"),
            PayrollError::InvalidEmployee { .. } => (StatusCode::BAD_REQUEST, "INVALID_EMPLOYEE"),
            PayrollError::EmptyBatch => (StatusCode::BAD_REQUEST, "EMPTY_BATCH"),
            PayrollError::OwnShiftRequest { .. } => (StatusCode::BAD_REQUEST, "OWN_SHIFT_REQUEST"),
            PayrollError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            PayrollError::NotAnEmployee => (StatusCode::FORBIDDEN, "NOT_AN_EMPLOYEE"),
            PayrollError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            PayrollError::LogNotFound { .. } => (StatusCode::NOT_FOUND, "LOG_NOT_FOUND"),
            PayrollError::WeekNotFound { .. } => (StatusCode::NOT_FOUND, "WEEK_NOT_FOUND"),
            PayrollError::NothingToPay { .. } => (StatusCode::CONFLICT, "NOTHING_TO_PAY"),
            PayrollError::ShiftUnavailable { .. } => (StatusCode::CONFLICT, "SHIFT_UNAVAILABLE"),
            PayrollError::StoreUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
            }
            PayrollError::InvalidConfig { .. }
            | PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                };
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}
