//! Weekly payroll aggregation.
//!
//! This module folds a flat list of work log entries into one [`WeekBucket`]
//! per (employee, week), the view the payroll screen is built from.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{WeekBucket, WorkLogEntry};

use super::week::monday_of;

/// Checks that an hourly rate can be applied to hours.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidConfig`] if the rate is zero or negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_hourly_rate;
/// use rust_decimal::Decimal;
///
/// assert!(validate_hourly_rate(Decimal::new(20, 0)).is_ok());
/// assert!(validate_hourly_rate(Decimal::ZERO).is_err());
/// ```
pub fn validate_hourly_rate(hourly_rate: Decimal) -> PayrollResult<()> {
    if hourly_rate <= Decimal::ZERO {
        return Err(PayrollError::InvalidConfig {
            message: format!("hourly rate must be positive, got {}", hourly_rate),
        });
    }
    Ok(())
}

/// Returns the cost of `hours` at `hourly_rate`.
pub(crate) fn cost_of(
    entry: &WorkLogEntry,
    hours: Decimal,
    hourly_rate: Decimal,
) -> PayrollResult<Decimal> {
    hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| PayrollError::InvalidEntry {
            entry_id: entry.id.to_string(),
            message: format!("cost of {} hours overflows", hours),
        })
}

/// Adds `amount` to a running total, failing on overflow.
///
/// `what` names the total in the error message.
pub(crate) fn add_to_total(
    entry: &WorkLogEntry,
    total: Decimal,
    amount: Decimal,
    what: &str,
) -> PayrollResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| PayrollError::InvalidEntry {
            entry_id: entry.id.to_string(),
            message: format!("{} overflow", what),
        })
}

/// Groups work log entries by employee and Monday-starting week.
///
/// Each entry is placed in the bucket keyed by its employee and the Monday on
/// or before its date. Totals are accumulated as exact decimals, so a bucket's
/// `total_cost` always equals `total_hours * hourly_rate`.
///
/// # Arguments
///
/// * `entries` - Work log entries in any order; may be empty
/// * `hourly_rate` - The rate applied to every hour
///
/// # Returns
///
/// The buckets ordered by week start, most recent first. Buckets sharing a
/// week are ordered by employee name, then employee ID. Unpaid IDs inside a
/// bucket keep the order of `entries`.
///
/// # Errors
///
/// - [`PayrollError::InvalidConfig`] if `hourly_rate` is not positive
/// - [`PayrollError::InvalidEntry`] for the first entry with a missing or
///   malformed date, with negative, non-finite or out-of-range hours, or
///   whose hours or cost would overflow its bucket's totals. Nothing is
///   returned in that case; partial payroll totals are never produced.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_by_week;
/// use payroll_engine::models::{LogId, WorkLogEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     WorkLogEntry {
///         id: LogId::Number(1),
///         employee_id: 7,
///         employee_name: "Asha Rai".to_string(),
///         date: "2024-03-04".to_string(), // Monday
///         hours: 8.0,
///         is_paid: false,
///         notes: None,
///     },
///     WorkLogEntry {
///         id: LogId::Number(2),
///         employee_id: 7,
///         employee_name: "Asha Rai".to_string(),
///         date: "2024-03-10".to_string(), // Sunday of the same week
///         hours: 5.0,
///         is_paid: true,
///         notes: None,
///     },
/// ];
///
/// let buckets = aggregate_by_week(&entries, Decimal::new(20, 0)).unwrap();
/// assert_eq!(buckets.len(), 1);
/// assert_eq!(buckets[0].week_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// assert_eq!(buckets[0].total_cost, Decimal::new(260, 0));
/// assert_eq!(buckets[0].unpaid_cost, Decimal::new(160, 0));
/// assert_eq!(buckets[0].unpaid_ids, vec![LogId::Number(1)]);
/// assert!(!buckets[0].is_fully_paid);
/// ```
pub fn aggregate_by_week(
    entries: &[WorkLogEntry],
    hourly_rate: Decimal,
) -> PayrollResult<Vec<WeekBucket>> {
    validate_hourly_rate(hourly_rate)?;

    let mut buckets: HashMap<(i64, NaiveDate), WeekBucket> = HashMap::new();

    for entry in entries {
        let week_start = monday_of(entry.work_date()?);
        let hours = entry.worked_hours()?;
        let cost = cost_of(entry, hours, hourly_rate)?;

        let bucket = buckets
            .entry((entry.employee_id, week_start))
            .or_insert_with(|| WeekBucket {
                employee_id: entry.employee_id,
                employee_name: entry.employee_name.clone(),
                week_start,
                entry_count: 0,
                total_hours: Decimal::ZERO,
                total_cost: Decimal::ZERO,
                unpaid_cost: Decimal::ZERO,
                unpaid_ids: Vec::new(),
                is_fully_paid: true,
            });

        bucket.entry_count += 1;
        bucket.total_hours = add_to_total(entry, bucket.total_hours, hours, "total hours")?;
        bucket.total_cost = add_to_total(entry, bucket.total_cost, cost, "total cost")?;

        // Once a bucket has an unpaid entry it stays unpaid for this call.
        if !entry.is_paid {
            bucket.is_fully_paid = false;
            bucket.unpaid_ids.push(entry.id.clone());
            bucket.unpaid_cost = add_to_total(entry, bucket.unpaid_cost, cost, "unpaid cost")?;
        }
    }

    let mut ordered: Vec<WeekBucket> = buckets.into_values().collect();
    ordered.sort_by(|a, b| {
        b.week_start
            .cmp(&a.week_start)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    Ok(ordered)
}
