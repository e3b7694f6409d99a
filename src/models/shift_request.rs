//! Shift swap board models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LogId;

/// Whether a posted shift still needs cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Waiting for someone to take it.
    Open,
    /// Taken by another employee.
    Taken,
}

/// A shift an employee has asked a colleague to cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the request.
    pub id: i64,
    /// The employee who needs cover.
    pub requester_id: i64,
    /// Display name of the requester.
    pub requester_name: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// The employee who took the shift.
    #[serde(default)]
    pub taker_id: Option<i64>,
    /// Current status.
    pub status: ShiftStatus,
}

/// The result of posting a shift request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPosted {
    /// The new request's ID.
    pub id: i64,
    /// Message the requester can forward to the team.
    pub team_message: String,
}

/// The result of taking a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTaken {
    /// The work log created for the taker.
    pub work_log_id: LogId,
    /// Announcement of who took the shift.
    pub message: String,
}
