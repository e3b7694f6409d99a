//! Storage abstraction consumed by the payroll service.

use crate::error::PayrollResult;
use crate::models::{BatchPayConfirmation, BatchPayRequest, WorkLogEntry};

/// The source of truth for work logs.
///
/// The payroll service reads entries through this trait, aggregates them, and
/// writes payment state back with [`LogStore::batch_pay`]. Implementations
/// must apply a batch all-or-nothing: either every listed log becomes paid or
/// none does.
pub trait LogStore: Send + Sync {
    /// Returns every work log, newest date first.
    fn work_logs(&self) -> PayrollResult<Vec<WorkLogEntry>>;

    /// Marks every log in the request as paid.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::EmptyBatch`](crate::error::PayrollError::EmptyBatch)
    ///   if the request lists no logs
    /// - [`PayrollError::LogNotFound`](crate::error::PayrollError::LogNotFound)
    ///   if any listed log does not exist; nothing is changed in that case
    fn batch_pay(&self, request: &BatchPayRequest) -> PayrollResult<BatchPayConfirmation>;
}
