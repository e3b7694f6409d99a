//! Request types for the payroll API.
//!
//! Bodies that are already domain types (new employees, new work logs, batch
//! pay requests) are accepted as-is; this module holds the remaining shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Session;

/// Request body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login name.
    pub username: String,
    /// The password.
    pub password: String,
}

/// Request body for `POST /api/work-logs/:id/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    /// The new note. Absent or blank clears it.
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for `POST /api/payroll/weekly/pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayWeekRequest {
    /// The employee whose week is paid.
    pub employee_id: i64,
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
}

/// Request body for `POST /api/shift-requests`.
///
/// The session is supplied by the client and is not checked against the
/// account store; any caller can act as any employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostShiftRequest {
    /// The session of the employee needing cover.
    pub session: Session,
    /// The date of the shift.
    pub date: NaiveDate,
}

/// Request body for `POST /api/shift-requests/:id/take`.
///
/// As with [`PostShiftRequest`], the session is taken on trust from the
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeShiftRequest {
    /// The session of the employee taking the shift.
    pub session: Session,
}

/// Query string for `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Reference date for the recent-hours window. Defaults to today (UTC).
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_deserialize_pay_week_request() {
        let json = r#"{"employee_id": 3, "week_start": "2024-03-04"}"#;
        let request: PayWeekRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, 3);
        assert_eq!(
            request.week_start,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
        );
    }

    #[test]
    fn test_deserialize_post_shift_request() {
        let json = r#"{
            "session": {"username": "asha", "role": "employee", "employee_id": 1},
            "date": "2025-02-05"
        }"#;
        let request: PostShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.session.role, UserRole::Employee);
        assert_eq!(request.session.employee_id, Some(1));
    }

    #[test]
    fn test_note_defaults_to_none() {
        let request: NoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.note.is_none());
    }
}
