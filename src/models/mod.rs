//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod batch_pay;
mod dashboard;
mod employee;
mod session;
mod shift_request;
mod week_bucket;
mod work_log;

pub use batch_pay::{BatchPayConfirmation, BatchPayRequest};
pub use dashboard::{DashboardStats, TopEmployee};
pub use employee::{Credentials, Employee, EmployeeCreated, NewEmployee};
pub use session::{Session, UserRole};
pub use shift_request::{ShiftPosted, ShiftRequest, ShiftStatus, ShiftTaken};
pub use week_bucket::WeekBucket;
pub use work_log::{LogId, NewWorkLog, WorkLogEntry};
