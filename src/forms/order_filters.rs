use crate::domain::{GetOrdersQuery, OrderStatus};
use crate::location::Location;

const ORDER_ID: &str = "orderId";
const CUSTOMER_NAME: &str = "customerName";
const STATUS: &str = "status";
const PAGE: &str = "page";

/// Value of the status select that means "no status filter".
pub const ALL_STATUSES: &str = "all";

/// Filter form of the orders table, bound to the location's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilterForm {
    pub order_id: String,
    pub customer_name: String,
    pub status: String,
}

impl Default for OrderFilterForm {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            customer_name: String::new(),
            status: ALL_STATUSES.to_string(),
        }
    }
}

impl OrderFilterForm {
    pub fn from_location(location: &Location) -> Self {
        Self {
            order_id: location.get(ORDER_ID).unwrap_or_default(),
            customer_name: location.get(CUSTOMER_NAME).unwrap_or_default(),
            status: location.get(STATUS).unwrap_or_else(|| ALL_STATUSES.to_string()),
        }
    }

    /// Writes present filters into the query string, drops absent ones and
    /// goes back to the first page.
    pub fn submit(&self, location: &mut Location) {
        set_or_delete(location, ORDER_ID, &self.order_id);
        set_or_delete(location, CUSTOMER_NAME, &self.customer_name);
        if self.status == ALL_STATUSES {
            location.delete(STATUS);
        } else {
            set_or_delete(location, STATUS, &self.status);
        }
        location.set(PAGE, "1");
    }

    /// Removes every filter, goes back to the first page and resets the form.
    pub fn clear(&mut self, location: &mut Location) {
        location.delete(ORDER_ID);
        location.delete(CUSTOMER_NAME);
        location.delete(STATUS);
        location.set(PAGE, "1");
        *self = Self::default();
    }
}

fn set_or_delete(location: &mut Location, key: &str, value: &str) {
    if value.is_empty() {
        location.delete(key);
    } else {
        location.set(key, value);
    }
}

/// Builds the `GET /orders` query for a location. `page` is 1-based and
/// falls back to the first page when missing or malformed.
pub fn orders_query(location: &Location) -> GetOrdersQuery {
    let page = location
        .get(PAGE)
        .and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let non_empty = |key: &str| location.get(key).filter(|v| !v.is_empty());

    GetOrdersQuery {
        page_index: page - 1,
        order_id: non_empty(ORDER_ID),
        customer_name: non_empty(CUSTOMER_NAME),
        status: non_empty(STATUS).and_then(|s| s.parse::<OrderStatus>().ok()),
    }
}

/// Moves the location to a 0-based page index.
pub fn go_to_page(location: &mut Location, page_index: u32) {
    location.set(PAGE, &(page_index + 1).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_writes_present_filters_and_resets_page() {
        let mut location = Location::parse("/orders?page=4").unwrap();
        let form = OrderFilterForm {
            order_id: "5".into(),
            customer_name: String::new(),
            status: "all".into(),
        };

        form.submit(&mut location);

        assert_eq!(location.to_string(), "/orders?page=1&orderId=5");
        assert_eq!(location.get("customerName"), None);
    }

    #[test]
    fn test_submit_on_empty_location() {
        let mut location = Location::parse("/orders").unwrap();
        let form = OrderFilterForm { order_id: "5".into(), ..OrderFilterForm::default() };
        form.submit(&mut location);
        assert_eq!(location.query(), "orderId=5&page=1");
    }

    #[test]
    fn test_submit_removes_filters_that_became_empty() {
        let mut location = Location::parse("/orders?customerName=Ana&status=pending&page=2").unwrap();
        let form = OrderFilterForm {
            order_id: String::new(),
            customer_name: String::new(),
            status: "delivered".into(),
        };
        form.submit(&mut location);
        assert_eq!(location.query(), "status=delivered&page=1");
    }

    #[test]
    fn test_clear_removes_all_filters_and_resets_form() {
        let mut location = Location::parse("/orders?orderId=5&customerName=Ana&status=pending&page=3").unwrap();
        let mut form = OrderFilterForm::from_location(&location);
        assert_eq!(form.status, "pending");

        form.clear(&mut location);

        assert_eq!(location.query(), "page=1");
        assert_eq!(form, OrderFilterForm::default());
    }

    #[test]
    fn test_orders_query_from_location() {
        let location = Location::parse("/orders?page=3&customerName=Ana&status=processing").unwrap();
        let query = orders_query(&location);
        assert_eq!(query.page_index, 2);
        assert_eq!(query.customer_name.as_deref(), Some("Ana"));
        assert_eq!(query.status, Some(OrderStatus::Processing));
        assert_eq!(query.order_id, None);
    }

    #[test]
    fn test_orders_query_defaults() {
        let location = Location::parse("/orders?page=zero&status=all").unwrap();
        let query = orders_query(&location);
        assert_eq!(query, GetOrdersQuery::default());
    }
}
