//! Dashboard statistics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee with the most hours logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopEmployee {
    /// Display name.
    pub name: String,
    /// Total hours logged, paid or not.
    pub hours: Decimal,
}

/// Headline figures for the admin dashboard.
///
/// `paid_count` and `unpaid_count` are the two series of the paid/unpaid chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Cost of all unpaid hours.
    pub payroll_cost_unpaid: Decimal,
    /// Hours logged within the recent window.
    pub hours_this_week: Decimal,
    /// Employee with the most hours overall.
    pub top_employee: Option<TopEmployee>,
    /// Number of paid work logs.
    pub paid_count: usize,
    /// Number of unpaid work logs.
    pub unpaid_count: usize,
}
