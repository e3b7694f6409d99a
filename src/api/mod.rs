//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for the employee directory, work
//! logs, weekly payroll, the dashboard and the shift-swap board.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DashboardQuery, LoginRequest, NoteRequest, PayWeekRequest, PostShiftRequest, TakeShiftRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, MessageResponse, PaidToggled, PayWeekResponse, WorkLogCreated,
};
pub use state::AppState;
