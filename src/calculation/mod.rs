//! Calculation logic for the payroll engine.
//!
//! This module contains the pure computations behind the payroll screens:
//! mapping dates to Monday-starting weeks, aggregating work logs into
//! employee/week buckets, building batch pay requests, dashboard statistics,
//! and the notification text handed back to callers.

mod aggregate;
mod batch_pay;
mod dashboard;
mod messages;
mod week;

pub use aggregate::{aggregate_by_week, validate_hourly_rate};
pub use batch_pay::{build_batch_pay_request, find_week_bucket};
pub use dashboard::calculate_dashboard_stats;
pub use messages::{
    batch_pay_summary, cover_request_message, pay_notification, pay_ready_message,
    shift_taken_message,
};
pub use week::monday_of;
