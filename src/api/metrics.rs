use tracing::instrument;

use super::ApiClient;
use crate::domain::{
    DailyRevenue, DailyRevenueQuery, DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount,
    MonthRevenue, PopularProduct,
};
use crate::error::ApiError;

impl_get_queries! {
    fn get_day_orders_amount() -> DayOrdersAmount = "/metrics/day-orders-amount";
    fn get_month_orders_amount() -> MonthOrdersAmount = "/metrics/month-orders-amount";
    fn get_month_revenue() -> MonthRevenue = "/metrics/month-receipt";
    fn get_month_canceled_orders_amount() -> MonthCanceledOrdersAmount = "/metrics/month-canceled-orders-amount";
    fn get_popular_products() -> Vec<PopularProduct> = "/metrics/popular-products";
}

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn get_daily_revenue_in_period(&self, query: &DailyRevenueQuery) -> Result<Vec<DailyRevenue>, ApiError> {
        Self::fetch(self.get("/metrics/daily-receipt-in-period").query(query)).await
    }
}
