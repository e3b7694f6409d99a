//! Dashboard statistics.
//!
//! Computes the admin dashboard's headline figures from the same work log
//! entries the weekly payroll view uses.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{DashboardStats, TopEmployee, WorkLogEntry};

use super::aggregate::{add_to_total, cost_of, validate_hourly_rate};

/// Computes dashboard statistics.
///
/// # Arguments
///
/// * `entries` - All work log entries
/// * `hourly_rate` - The rate applied to every hour
/// * `today` - The reference date for the recent-hours window
/// * `window_days` - Entries dated on or after `today - window_days` count
///   towards `hours_this_week`
///
/// # Errors
///
/// Fails with the same validation errors as
/// [`aggregate_by_week`](super::aggregate_by_week).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_dashboard_stats;
/// use payroll_engine::models::{LogId, WorkLogEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![WorkLogEntry {
///     id: LogId::Number(1),
///     employee_id: 7,
///     employee_name: "Asha Rai".to_string(),
///     date: "2024-03-04".to_string(),
///     hours: 8.0,
///     is_paid: false,
///     notes: None,
/// }];
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// let stats = calculate_dashboard_stats(&entries, Decimal::new(20, 0), today, 7).unwrap();
/// assert_eq!(stats.payroll_cost_unpaid, Decimal::new(160, 0));
/// assert_eq!(stats.unpaid_count, 1);
/// ```
pub fn calculate_dashboard_stats(
    entries: &[WorkLogEntry],
    hourly_rate: Decimal,
    today: NaiveDate,
    window_days: u32,
) -> PayrollResult<DashboardStats> {
    validate_hourly_rate(hourly_rate)?;

    let window_start = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut payroll_cost_unpaid = Decimal::ZERO;
    let mut hours_this_week = Decimal::ZERO;
    let mut paid_count = 0;
    let mut unpaid_count = 0;
    let mut hours_by_employee: HashMap<i64, (String, Decimal)> = HashMap::new();

    for entry in entries {
        let date = entry.work_date()?;
        let hours = entry.worked_hours()?;

        if entry.is_paid {
            paid_count += 1;
        } else {
            unpaid_count += 1;
            let cost = cost_of(entry, hours, hourly_rate)?;
            payroll_cost_unpaid = add_to_total(entry, payroll_cost_unpaid, cost, "unpaid cost")?;
        }

        if date >= window_start {
            hours_this_week = add_to_total(entry, hours_this_week, hours, "recent hours")?;
        }

        let (_, total) = hours_by_employee
            .entry(entry.employee_id)
            .or_insert_with(|| (entry.employee_name.clone(), Decimal::ZERO));
        *total = add_to_total(entry, *total, hours, "employee hours")?;
    }

    let top_employee = hours_by_employee
        .into_values()
        .fold(None::<TopEmployee>, |best, (name, hours)| match best {
            Some(current)
                if current.hours > hours || (current.hours == hours && current.name <= name) =>
            {
                Some(current)
            }
            _ => Some(TopEmployee { name, hours }),
        });

    Ok(DashboardStats {
        payroll_cost_unpaid,
        hours_this_week,
        top_employee,
        paid_count,
        unpaid_count,
    })
}
