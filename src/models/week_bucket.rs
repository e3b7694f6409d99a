//! Week bucket model.
//!
//! A [`WeekBucket`] is the payroll view of everything one employee logged in
//! one Monday-to-Sunday week. Buckets are derived on every aggregation call
//! and never stored.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LogId;

/// Aggregated work logs for one employee within one Monday-starting week.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LogId, WeekBucket};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bucket = WeekBucket {
///     employee_id: 7,
///     employee_name: "Asha Rai".to_string(),
///     week_start: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     entry_count: 2,
///     total_hours: Decimal::new(13, 0),
///     total_cost: Decimal::new(260, 0),
///     unpaid_cost: Decimal::new(160, 0),
///     unpaid_ids: vec![LogId::Number(1)],
///     is_fully_paid: false,
/// };
///
/// assert_eq!(bucket.week_end(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// assert_eq!(bucket.status_label(), "Unpaid / Partial");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The employee every entry in the bucket belongs to.
    pub employee_id: i64,
    /// Display name of the employee.
    pub employee_name: String,
    /// The Monday that begins the week.
    pub week_start: NaiveDate,
    /// Number of work log entries folded into the bucket.
    pub entry_count: usize,
    /// Sum of hours over all entries.
    pub total_hours: Decimal,
    /// Sum of hours x hourly rate over all entries.
    pub total_cost: Decimal,
    /// Cost of the entries that are not yet paid.
    pub unpaid_cost: Decimal,
    /// IDs of unpaid entries, in the order they were seen.
    pub unpaid_ids: Vec<LogId>,
    /// True iff every entry in the bucket is paid.
    pub is_fully_paid: bool,
}

impl WeekBucket {
    /// Returns the Sunday that ends the week.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(self.week_start)
    }

    /// Returns the payment status shown next to the bucket.
    pub fn status_label(&self) -> &'static str {
        if self.is_fully_paid {
            "Paid"
        } else {
            "Unpaid / Partial"
        }
    }
}
