use tracing::instrument;

use crate::api::ApiClient;
use crate::domain::{
    DailyRevenue, DailyRevenueQuery, DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount,
    MonthRevenue, PopularProduct,
};
use crate::error::MetricsError;

/// Everything the dashboard cards need, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub day_orders: DayOrdersAmount,
    pub month_orders: MonthOrdersAmount,
    pub month_revenue: MonthRevenue,
    pub month_canceled: MonthCanceledOrdersAmount,
    pub popular_products: Vec<PopularProduct>,
}

#[derive(Clone)]
pub struct MetricsClient {
    api: ApiClient,
}

impl MetricsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardMetrics, MetricsError> {
        let (day_orders, month_orders, month_revenue, month_canceled, popular_products) = tokio::try_join!(
            self.api.get_day_orders_amount(),
            self.api.get_month_orders_amount(),
            self.api.get_month_revenue(),
            self.api.get_month_canceled_orders_amount(),
            self.api.get_popular_products(),
        )?;
        Ok(DashboardMetrics {
            day_orders,
            month_orders,
            month_revenue,
            month_canceled,
            popular_products,
        })
    }

    #[instrument(skip(self))]
    pub async fn popular_products(&self) -> Result<Vec<PopularProduct>, MetricsError> {
        Ok(self.api.get_popular_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn daily_revenue(&self, query: &DailyRevenueQuery) -> Result<Vec<DailyRevenue>, MetricsError> {
        Ok(self.api.get_daily_revenue_in_period(query).await?)
    }
}
