//! Batch pay request and confirmation models.

use serde::{Deserialize, Serialize};

use super::LogId;

/// A request to mark a set of work logs as paid in one all-or-nothing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPayRequest {
    /// The work logs to mark paid.
    pub log_ids: Vec<LogId>,
}

/// The store's answer to a successful [`BatchPayRequest`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::BatchPayConfirmation;
///
/// let confirmation = BatchPayConfirmation {
///     message: "Successfully marked 2 logs as paid".to_string(),
///     count: 2,
///     employees: vec!["Asha Rai".to_string()],
///     notification: Some("Asha Rai your pay is ready to collect".to_string()),
/// };
/// assert_eq!(confirmation.employees.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPayConfirmation {
    /// Human-readable summary.
    pub message: String,
    /// Number of work logs marked paid.
    pub count: usize,
    /// Names of the employees whose logs were paid, sorted and unique.
    pub employees: Vec<String>,
    /// Pre-formatted message for the caller to relay to the employees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_batch_pay_request() {
        let request: BatchPayRequest =
            serde_json::from_str(r#"{"log_ids": [1, 2, "x"]}"#).unwrap();
        assert_eq!(
            request.log_ids,
            vec![LogId::Number(1), LogId::Number(2), LogId::Text("x".to_string())]
        );
    }

    #[test]
    fn test_confirmation_skips_missing_notification() {
        let confirmation = BatchPayConfirmation {
            message: "Successfully marked 0 logs as paid".to_string(),
            count: 0,
            employees: vec![],
            notification: None,
        };
        let json = serde_json::to_string(&confirmation).unwrap();
        assert!(!json.contains("notification"));
    }
}
