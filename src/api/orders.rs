use tracing::instrument;

use super::ApiClient;
use crate::domain::{GetOrdersQuery, OrderAction, OrderDetails, OrdersPage};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /orders`, forwarding the page index and any present filters.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: &GetOrdersQuery) -> Result<OrdersPage, ApiError> {
        Self::fetch(self.get("/orders").query(query)).await
    }

    #[instrument(skip(self))]
    pub async fn get_order_details(&self, order_id: &str) -> Result<OrderDetails, ApiError> {
        let url = self.segments_url(&["orders", order_id])?;
        Self::fetch(self.http.get(url)).await
    }

    async fn transition_order(&self, order_id: &str, action: OrderAction) -> Result<(), ApiError> {
        let url = self.segments_url(&["orders", order_id, action.path_segment()])?;
        Self::execute(self.http.patch(url)).await
    }
}

impl_order_transitions!(approve, cancel, dispatch, deliver);
