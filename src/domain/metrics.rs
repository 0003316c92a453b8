//! Server-computed aggregates shown on the dashboard. All read-only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOrdersAmount {
    pub amount: i64,
    pub diff_from_yesterday: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOrdersAmount {
    pub amount: i64,
    pub diff_from_last_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCanceledOrdersAmount {
    pub amount: i64,
    pub diff_from_last_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRevenue {
    /// Amount in cents.
    pub receipt: i64,
    pub diff_from_last_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularProduct {
    pub product: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: DateTime<Utc>,
    /// Amount in cents.
    pub receipt: i64,
}

/// Query of `GET /metrics/daily-receipt-in-period`. Absent bounds are left
/// for the server to default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DailyRevenueQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}
