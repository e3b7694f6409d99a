//! Payroll workflows.
//!
//! [`PayrollService`] ties the pure calculations to a [`LogStore`]: it reads
//! a fresh snapshot of the work logs for every operation, aggregates it, and
//! writes payment state back through the store's batch-pay operation.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{
    aggregate_by_week, build_batch_pay_request, calculate_dashboard_stats, find_week_bucket,
    validate_hourly_rate,
};
use crate::error::PayrollResult;
use crate::models::{BatchPayConfirmation, BatchPayRequest, DashboardStats, WeekBucket};
use crate::store::LogStore;

/// The result of paying one employee's week.
#[derive(Debug, Clone, PartialEq)]
pub struct PayWeekOutcome {
    /// What the store reported.
    pub confirmation: BatchPayConfirmation,
    /// The weekly summary recomputed after payment.
    pub buckets: Vec<WeekBucket>,
}

/// Runs payroll operations against a store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::service::PayrollService;
/// use payroll_engine::store::InMemoryStore;
///
/// let config = PayrollConfig::default();
/// let store = Arc::new(InMemoryStore::new(&config).unwrap());
/// let service = PayrollService::new(store, config.hourly_rate, 7).unwrap();
///
/// assert!(service.weekly_summary().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct PayrollService<S> {
    store: Arc<S>,
    hourly_rate: Decimal,
    recent_hours_window_days: u32,
}

impl<S> Clone for PayrollService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hourly_rate: self.hourly_rate,
            recent_hours_window_days: self.recent_hours_window_days,
        }
    }
}

impl<S: LogStore> PayrollService<S> {
    /// Creates a service over `store` paying `hourly_rate` per hour.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`](crate::error::PayrollError::InvalidConfig)
    /// if the rate is not positive.
    pub fn new(
        store: Arc<S>,
        hourly_rate: Decimal,
        recent_hours_window_days: u32,
    ) -> PayrollResult<Self> {
        validate_hourly_rate(hourly_rate)?;
        Ok(Self {
            store,
            hourly_rate,
            recent_hours_window_days,
        })
    }

    /// Returns the hourly rate applied to every hour.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Aggregates the current work logs into weekly buckets, most recent
    /// week first.
    pub fn weekly_summary(&self) -> PayrollResult<Vec<WeekBucket>> {
        let entries = self.store.work_logs()?;
        let buckets = aggregate_by_week(&entries, self.hourly_rate)?;
        debug!(entries = entries.len(), buckets = buckets.len(), "Weekly summary built");
        Ok(buckets)
    }

    /// Pays every unpaid entry in one employee's week.
    ///
    /// The bucket is recomputed from the store before paying, so entries
    /// paid elsewhere in the meantime are not paid twice.
    ///
    /// # Errors
    ///
    /// - `WeekNotFound` if the employee has no entries that week
    /// - `NothingToPay` if the week is already fully paid
    /// - any error the store reports
    pub fn pay_week(&self, employee_id: i64, week_start: NaiveDate) -> PayrollResult<PayWeekOutcome> {
        let buckets = self.weekly_summary()?;
        let bucket = find_week_bucket(&buckets, employee_id, week_start)?;
        let request = build_batch_pay_request(bucket)?;

        info!(
            employee_id,
            week_start = %week_start,
            unpaid_cost = %bucket.unpaid_cost,
            entries = request.log_ids.len(),
            "Paying week"
        );

        let confirmation = self.store.batch_pay(&request)?;
        let buckets = self.weekly_summary()?;

        Ok(PayWeekOutcome {
            confirmation,
            buckets,
        })
    }

    /// Pays an arbitrary set of work logs.
    pub fn pay_logs(&self, request: &BatchPayRequest) -> PayrollResult<BatchPayConfirmation> {
        let confirmation = self.store.batch_pay(request)?;
        info!(count = confirmation.count, "Work logs paid");
        Ok(confirmation)
    }

    /// Computes the dashboard figures as of `today`.
    pub fn dashboard(&self, today: NaiveDate) -> PayrollResult<DashboardStats> {
        let entries = self.store.work_logs()?;
        calculate_dashboard_stats(
            &entries,
            self.hourly_rate,
            today,
            self.recent_hours_window_days,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use crate::error::PayrollError;
    use crate::models::{LogId, NewEmployee, NewWorkLog};
    use crate::store::InMemoryStore;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_service() -> (Arc<InMemoryStore>, PayrollService<InMemoryStore>) {
        let config = PayrollConfig::default();
        let store = Arc::new(InMemoryStore::new(&config).unwrap());
        let service = PayrollService::new(Arc::clone(&store), config.hourly_rate, 7).unwrap();
        (store, service)
    }

    fn add_employee(store: &InMemoryStore, name: &str) -> i64 {
        store
            .add_employee(NewEmployee {
                name: name.to_string(),
                role: "Chef".to_string(),
                ..NewEmployee::default()
            })
            .unwrap()
            .employee
            .id
    }

    fn add_log(store: &InMemoryStore, employee_id: i64, date: &str, hours: f64) -> LogId {
        store
            .add_work_log(NewWorkLog {
                employee_id,
                date: date.to_string(),
                hours: Some(hours),
            })
            .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_rate() {
        let store = Arc::new(InMemoryStore::new(&PayrollConfig::default()).unwrap());
        assert!(matches!(
            PayrollService::new(store, Decimal::ZERO, 7),
            Err(PayrollError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_weekly_summary_groups_by_week() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        add_log(&store, asha, "2024-03-04", 8.0);
        add_log(&store, asha, "2024-03-06", 5.0);
        add_log(&store, asha, "2024-03-11", 2.0);

        let buckets = service.weekly_summary().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].week_start, make_date(2024, 3, 11));
        assert_eq!(buckets[1].week_start, make_date(2024, 3, 4));
        assert_eq!(buckets[1].total_hours, dec("13"));
        assert_eq!(buckets[1].total_cost, dec("260"));
    }

    #[test]
    fn test_pay_week_pays_only_that_week() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        add_log(&store, asha, "2024-03-04", 8.0);
        add_log(&store, asha, "2024-03-11", 2.0);

        let outcome = service.pay_week(asha, make_date(2024, 3, 4)).unwrap();
        assert_eq!(outcome.confirmation.count, 1);
        assert_eq!(
            outcome.confirmation.notification.as_deref(),
            Some("Asha Rai your pay is ready to collect")
        );

        let paid_week = outcome
            .buckets
            .iter()
            .find(|b| b.week_start == make_date(2024, 3, 4))
            .unwrap();
        assert!(paid_week.is_fully_paid);
        assert_eq!(paid_week.unpaid_cost, Decimal::ZERO);

        let other_week = outcome
            .buckets
            .iter()
            .find(|b| b.week_start == make_date(2024, 3, 11))
            .unwrap();
        assert!(!other_week.is_fully_paid);
    }

    #[test]
    fn test_pay_week_twice_reports_nothing_to_pay() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        add_log(&store, asha, "2024-03-05", 8.0);

        service.pay_week(asha, make_date(2024, 3, 4)).unwrap();
        assert!(matches!(
            service.pay_week(asha, make_date(2024, 3, 4)),
            Err(PayrollError::NothingToPay { .. })
        ));
    }

    #[test]
    fn test_pay_unknown_week() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        add_log(&store, asha, "2024-03-05", 8.0);

        assert!(matches!(
            service.pay_week(asha, make_date(2024, 1, 1)),
            Err(PayrollError::WeekNotFound { .. })
        ));
    }

    #[test]
    fn test_toggling_a_paid_log_reopens_its_week() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        let LogId::Number(first) = add_log(&store, asha, "2024-03-04", 8.0) else {
            panic!("store hands out numeric IDs");
        };
        add_log(&store, asha, "2024-03-05", 2.0);

        service.pay_week(asha, make_date(2024, 3, 4)).unwrap();
        assert!(service.weekly_summary().unwrap()[0].is_fully_paid);

        assert!(!store.toggle_paid(first).unwrap());

        let bucket = &service.weekly_summary().unwrap()[0];
        assert!(!bucket.is_fully_paid);
        assert_eq!(bucket.unpaid_ids, vec![LogId::Number(first)]);
        assert_eq!(bucket.unpaid_cost, dec("160"));

        let outcome = service.pay_week(asha, make_date(2024, 3, 4)).unwrap();
        assert_eq!(outcome.confirmation.count, 1);
    }

    #[test]
    fn test_pay_logs_delegates_to_store() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        let id = add_log(&store, asha, "2024-03-05", 8.0);

        let confirmation = service
            .pay_logs(&BatchPayRequest { log_ids: vec![id] })
            .unwrap();
        assert_eq!(confirmation.count, 1);
        assert!(service.weekly_summary().unwrap()[0].is_fully_paid);
    }

    #[test]
    fn test_dashboard_reflects_payments() {
        let (store, service) = create_service();
        let asha = add_employee(&store, "Asha Rai");
        let bo = add_employee(&store, "Bo Lim");
        add_log(&store, asha, "2024-03-04", 8.0);
        add_log(&store, bo, "2024-03-05", 4.0);

        let today = make_date(2024, 3, 6);
        let stats = service.dashboard(today).unwrap();
        assert_eq!(stats.payroll_cost_unpaid, dec("240"));
        assert_eq!(stats.hours_this_week, dec("12"));
        assert_eq!(stats.top_employee.unwrap().name, "Asha Rai");

        service.pay_week(asha, make_date(2024, 3, 4)).unwrap();
        let stats = service.dashboard(today).unwrap();
        assert_eq!(stats.payroll_cost_unpaid, dec("80"));
        assert_eq!(stats.paid_count, 1);
        assert_eq!(stats.unpaid_count, 1);
    }
}
