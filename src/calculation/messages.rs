//! Notification message text.
//!
//! These strings are handed back to callers as-is. Sending them over a
//! messaging channel is the caller's decision.

use chrono::NaiveDate;

/// Tells an employee their pay has been settled.
pub fn pay_ready_message(employee_name: &str) -> String {
    format!("{} your pay is ready to collect", employee_name)
}

/// Announces who took a posted shift.
pub fn shift_taken_message(taker_name: &str, date: NaiveDate) -> String {
    format!("{} has taken the shift for {}", taker_name, date)
}

/// Asks the team to cover a shift.
pub fn cover_request_message(date: NaiveDate) -> String {
    format!(
        "Team, I need cover for my shift on {}. Please pick it up in the app.",
        date
    )
}

/// Summarises a batch pay.
pub fn batch_pay_summary(count: usize) -> String {
    format!("Successfully marked {} logs as paid", count)
}

/// Combines per-employee pay messages into one notification, one line each.
///
/// Returns `None` when there is nobody to notify.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::pay_notification;
///
/// let names = vec!["Asha".to_string(), "Bo".to_string()];
/// assert_eq!(
///     pay_notification(&names).unwrap(),
///     "Asha your pay is ready to collect\nBo your pay is ready to collect"
/// );
/// assert_eq!(pay_notification(&[]), None);
/// ```
pub fn pay_notification(employee_names: &[String]) -> Option<String> {
    if employee_names.is_empty() {
        return None;
    }

    Some(
        employee_names
            .iter()
            .map(|name| pay_ready_message(name))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
