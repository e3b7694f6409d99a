//! Batch pay request construction.

use chrono::NaiveDate;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{BatchPayRequest, WeekBucket};

/// Builds the request that settles every unpaid entry in a week bucket.
///
/// The request lists exactly the bucket's unpaid IDs, in the same order.
/// The store is expected to apply it all-or-nothing, and the caller should
/// re-aggregate from fresh data afterwards instead of assuming success.
///
/// # Errors
///
/// Returns [`PayrollError::NothingToPay`] if the bucket is already fully paid.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::build_batch_pay_request;
/// use payroll_engine::models::{LogId, WeekBucket};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let bucket = WeekBucket {
///     employee_id: 7,
///     employee_name: "Asha Rai".to_string(),
///     week_start: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     entry_count: 3,
///     total_hours: Decimal::new(24, 0),
///     total_cost: Decimal::new(480, 0),
///     unpaid_cost: Decimal::new(480, 0),
///     unpaid_ids: vec![LogId::Number(1), LogId::Number(2), LogId::Number(3)],
///     is_fully_paid: false,
/// };
///
/// let request = build_batch_pay_request(&bucket).unwrap();
/// assert_eq!(request.log_ids, bucket.unpaid_ids);
/// ```
pub fn build_batch_pay_request(bucket: &WeekBucket) -> PayrollResult<BatchPayRequest> {
    if bucket.is_fully_paid || bucket.unpaid_ids.is_empty() {
        return Err(PayrollError::NothingToPay {
            employee_id: bucket.employee_id,
            week_start: bucket.week_start,
        });
    }

    Ok(BatchPayRequest {
        log_ids: bucket.unpaid_ids.clone(),
    })
}

/// Finds the bucket for an employee's week.
///
/// # Errors
///
/// Returns [`PayrollError::WeekNotFound`] if no bucket matches.
pub fn find_week_bucket(
    buckets: &[WeekBucket],
    employee_id: i64,
    week_start: NaiveDate,
) -> PayrollResult<&WeekBucket> {
    buckets
        .iter()
        .find(|b| b.employee_id == employee_id && b.week_start == week_start)
        .ok_or(PayrollError::WeekNotFound {
            employee_id,
            week_start,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogId;
    use rust_decimal::Decimal;

    fn make_bucket(employee_id: i64, week_start: &str, unpaid: Vec<LogId>) -> WeekBucket {
        WeekBucket {
            employee_id,
            employee_name: "Asha".to_string(),
            week_start: NaiveDate::parse_from_str(week_start, "%Y-%m-%d").unwrap(),
            entry_count: unpaid.len().max(1),
            total_hours: Decimal::new(8, 0),
            total_cost: Decimal::new(160, 0),
            unpaid_cost: if unpaid.is_empty() {
                Decimal::ZERO
            } else {
                Decimal::new(160, 0)
            },
            is_fully_paid: unpaid.is_empty(),
            unpaid_ids: unpaid,
        }
    }

    #[test]
    fn test_request_lists_unpaid_ids_in_order() {
        let ids = vec![LogId::Number(1), LogId::Number(2), LogId::Number(3)];
        let bucket = make_bucket(7, "2024-03-04", ids.clone());

        let request = build_batch_pay_request(&bucket).unwrap();
        assert_eq!(request.log_ids, ids);
    }

    #[test]
    fn test_request_keeps_unsorted_order() {
        let ids = vec![LogId::Number(9), LogId::from("b"), LogId::Number(2)];
        let bucket = make_bucket(7, "2024-03-04", ids.clone());

        assert_eq!(build_batch_pay_request(&bucket).unwrap().log_ids, ids);
    }

    #[test]
    fn test_fully_paid_bucket_has_nothing_to_pay() {
        let bucket = make_bucket(7, "2024-03-04", vec![]);

        match build_batch_pay_request(&bucket) {
            Err(PayrollError::NothingToPay {
                employee_id,
                week_start,
            }) => {
                assert_eq!(employee_id, 7);
                assert_eq!(week_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
            }
            other => panic!("Expected NothingToPay, got {:?}", other),
        }
    }

    #[test]
    fn test_find_week_bucket() {
        let buckets = vec![
            make_bucket(1, "2024-03-11", vec![LogId::Number(5)]),
            make_bucket(1, "2024-03-04", vec![LogId::Number(4)]),
            make_bucket(2, "2024-03-04", vec![]),
        ];
        let week = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

        let found = find_week_bucket(&buckets, 1, week).unwrap();
        assert_eq!(found.unpaid_ids, vec![LogId::Number(4)]);

        assert!(matches!(
            find_week_bucket(&buckets, 3, week),
            Err(PayrollError::WeekNotFound { employee_id: 3, .. })
        ));
    }
}
