use tracing::{debug, info, instrument, warn};

use crate::actor_framework::{CacheClient, Cacheable, QueryKey};
use crate::api::ApiClient;
use crate::domain::{GetOrdersQuery, OrderAction, OrderDetails, OrderStatus, OrdersPage};
use crate::error::OrderError;
#[cfg(test)]
use crate::error::CacheError;

/// New status of one order, mirrored into every cached view of it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatusPatch {
    pub order_id: String,
    pub status: OrderStatus,
}

impl Cacheable for OrdersPage {
    type Patch = OrderStatusPatch;

    fn apply_patch(&mut self, patch: &OrderStatusPatch) {
        for order in self.orders.iter_mut().filter(|o| o.order_id == patch.order_id) {
            order.status = patch.status;
        }
    }
}

impl Cacheable for OrderDetails {
    type Patch = OrderStatusPatch;

    fn apply_patch(&mut self, patch: &OrderStatusPatch) {
        if self.id == patch.order_id {
            self.status = patch.status;
        }
    }
}

pub fn orders_key_prefix() -> QueryKey {
    QueryKey::new("orders")
}

pub fn orders_key(query: &GetOrdersQuery) -> QueryKey {
    orders_key_prefix()
        .with(query.page_index.to_string())
        .with(query.order_id.clone().unwrap_or_default())
        .with(query.customer_name.clone().unwrap_or_default())
        .with(query.status.map(|s| s.as_str()).unwrap_or_default())
}

pub fn order_details_key(order_id: &str) -> QueryKey {
    QueryKey::new("order").with(order_id)
}

/// Client for the orders listing, details and status transitions.
#[derive(Clone)]
pub struct OrderClient {
    api: ApiClient,
    pages: CacheClient<OrdersPage>,
    details: CacheClient<OrderDetails>,
}

impl OrderClient {
    pub fn new(api: ApiClient, pages: CacheClient<OrdersPage>, details: CacheClient<OrderDetails>) -> Self {
        Self { api, pages, details }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: &GetOrdersQuery) -> Result<OrdersPage, OrderError> {
        self.pages
            .fetch_query(orders_key(query), || async { self.api.get_orders(query).await.map_err(OrderError::from) })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_order_details(&self, order_id: &str) -> Result<OrderDetails, OrderError> {
        self.details
            .fetch_query(order_details_key(order_id), || async {
                self.api.get_order_details(order_id).await.map_err(OrderError::from)
            })
            .await
    }

    /// Cached listing page for `query`, if one was ever fetched.
    #[cfg(test)]
    pub async fn cached_page(&self, query: &GetOrdersQuery) -> Result<Option<OrdersPage>, CacheError> {
        self.pages.get(orders_key(query)).await
    }

    /// Runs `action` only if it would be offered for the order's current status.
    #[instrument(skip(self))]
    pub async fn perform(&self, order_id: &str, action: OrderAction) -> Result<(), OrderError> {
        let order = self.get_order_details(order_id).await?;
        if !order.status.allows(action) {
            return Err(OrderError::ActionNotAvailable { action, status: order.status });
        }
        match action {
            OrderAction::Approve => self.approve_order(order_id).await,
            OrderAction::Cancel => self.cancel_order(order_id).await,
            OrderAction::Dispatch => self.dispatch_order(order_id).await,
            OrderAction::Deliver => self.deliver_order(order_id).await,
        }
    }

    async fn transition(&self, order_id: &str, action: OrderAction) -> Result<(), OrderError> {
        match action {
            OrderAction::Approve => self.api.approve_order(order_id).await?,
            OrderAction::Cancel => self.api.cancel_order(order_id).await?,
            OrderAction::Dispatch => self.api.dispatch_order(order_id).await?,
            OrderAction::Deliver => self.api.deliver_order(order_id).await?,
        }

        let patch = OrderStatusPatch {
            order_id: order_id.to_string(),
            status: action.resulting_status(),
        };
        // The server already applied the change, so cache failures are only logged.
        match self.pages.update_matching(orders_key_prefix(), patch.clone()).await {
            Ok(pages) => debug!(cached_pages = pages, "Order status mirrored into cache"),
            Err(e) => warn!(error = %e, "Could not mirror order status into cached pages"),
        }
        if let Err(e) = self.details.update(order_details_key(order_id), patch).await {
            warn!(error = %e, "Could not mirror order status into cached details");
        }
        info!(order_id = %order_id, status = %action.resulting_status(), "Order status changed");
        Ok(())
    }
}

impl_order_actions!(OrderClient, approve, cancel, dispatch, deliver);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderSummary, PageMeta};
    use chrono::Utc;

    fn summary(id: &str, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            order_id: id.into(),
            created_at: Utc::now(),
            status,
            customer_name: "Ana".into(),
            total: 1000,
        }
    }

    #[test]
    fn test_page_patch_only_touches_matching_order() {
        let mut page = OrdersPage {
            orders: vec![summary("a", OrderStatus::Pending), summary("b", OrderStatus::Pending)],
            meta: PageMeta { page_index: 0, per_page: 10, total_count: 2 },
        };
        page.apply_patch(&OrderStatusPatch { order_id: "b".into(), status: OrderStatus::Processing });
        assert_eq!(page.orders[0].status, OrderStatus::Pending);
        assert_eq!(page.orders[1].status, OrderStatus::Processing);
    }

    #[test]
    fn test_orders_key_distinguishes_filters() {
        let plain = GetOrdersQuery::default();
        let filtered = GetOrdersQuery { status: Some(OrderStatus::Pending), ..GetOrdersQuery::default() };
        assert_ne!(orders_key(&plain), orders_key(&filtered));
        assert!(orders_key(&filtered).starts_with(&orders_key_prefix()));
        assert!(!order_details_key("x").starts_with(&orders_key_prefix()));
    }
}
