use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle label of an order. Transitions only move forward
/// (pending → processing → delivering → delivered) or to canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Canceled,
    Processing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Canceled,
        OrderStatus::Processing,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Actions a manager is offered for an order in this status.
    pub fn available_actions(&self) -> &'static [OrderAction] {
        match self {
            OrderStatus::Pending => &[OrderAction::Approve, OrderAction::Cancel],
            OrderStatus::Processing => &[OrderAction::Dispatch, OrderAction::Cancel],
            OrderStatus::Delivering => &[OrderAction::Deliver],
            OrderStatus::Canceled | OrderStatus::Delivered => &[],
        }
    }

    pub fn allows(&self, action: OrderAction) -> bool {
        self.available_actions().contains(&action)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status-changing actions exposed on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Approve,
    Cancel,
    Dispatch,
    Deliver,
}

impl OrderAction {
    /// Last path segment of `PATCH /orders/{id}/<segment>`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            OrderAction::Approve => "approve",
            OrderAction::Cancel => "cancel",
            OrderAction::Dispatch => "dispatch",
            OrderAction::Deliver => "deliver",
        }
    }

    /// Status the server moves the order to once the action succeeds.
    pub fn resulting_status(&self) -> OrderStatus {
        match self {
            OrderAction::Approve => OrderStatus::Processing,
            OrderAction::Cancel => OrderStatus::Canceled,
            OrderAction::Dispatch => OrderStatus::Delivering,
            OrderAction::Deliver => OrderStatus::Delivered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Approve => "Aprovar",
            OrderAction::Cancel => "Cancelar",
            OrderAction::Dispatch => "Em entrega",
            OrderAction::Deliver => "Entregue",
        }
    }
}

/// One row of the orders listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Amount in cents.
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_index: u32,
    pub per_page: u32,
    pub total_count: u32,
}

impl PageMeta {
    pub fn page_count(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        self.total_count.div_ceil(self.per_page).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<OrderSummary>,
    pub meta: PageMeta,
}

/// Query parameters accepted by `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrdersQuery {
    pub page_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub price_in_cents: i64,
    pub quantity: u32,
    pub product: ProductRef,
}

impl OrderItem {
    pub fn subtotal_in_cents(&self) -> i64 {
        self.price_in_cents * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_in_cents: i64,
    pub customer: Customer,
    pub order_items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderStatus::Pending, &[OrderAction::Approve, OrderAction::Cancel])]
    #[case(OrderStatus::Processing, &[OrderAction::Dispatch, OrderAction::Cancel])]
    #[case(OrderStatus::Delivering, &[OrderAction::Deliver])]
    #[case(OrderStatus::Delivered, &[])]
    #[case(OrderStatus::Canceled, &[])]
    fn test_available_actions(#[case] status: OrderStatus, #[case] expected: &[OrderAction]) {
        assert_eq!(status.available_actions(), expected);
    }

    #[test]
    fn test_status_parse_roundtrip_and_reject() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!("all".parse::<OrderStatus>(), Err(UnknownStatus("all".into())));
    }

    #[test]
    fn test_orders_page_deserializes_from_camel_case() {
        let json = r#"{
            "orders": [{
                "orderId": "o1",
                "createdAt": "2024-01-10T12:00:00.000Z",
                "status": "delivering",
                "customerName": "Maria",
                "total": 4590
            }],
            "meta": { "pageIndex": 0, "perPage": 10, "totalCount": 21 }
        }"#;
        let page: OrdersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.orders[0].status, OrderStatus::Delivering);
        assert_eq!(page.meta.page_count(), 3);
    }

    #[test]
    fn test_page_count_never_zero() {
        let meta = PageMeta { page_index: 0, per_page: 10, total_count: 0 };
        assert_eq!(meta.page_count(), 1);
    }
}
