//! Date-to-week mapping.
//!
//! Payroll weeks run Monday to Sunday. A Sunday therefore closes the week that
//! began six days earlier rather than opening a new one.

use chrono::{NaiveDate, Weekday};

/// Returns the Monday on or before `date`.
///
/// Works purely on calendar dates, so the result cannot drift with the
/// local timezone, and is correct across month and year boundaries.
///
/// # Arguments
///
/// * `date` - Any calendar date
///
/// # Returns
///
/// The latest date that is not after `date` and falls on a Monday.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::monday_of;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(monday_of(sunday), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
///
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// assert_eq!(monday_of(monday), monday);
/// ```
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}
