use chrono::{DateTime, Utc};

use super::order_status::render_status;
use super::{bold, pad};
use crate::domain::{OrderSummary, OrdersPage, PageMeta};
use crate::format::{currency, distance_to_now};

const HEADERS: [(&str, usize); 6] = [
    ("Identificador", 26),
    ("Realizado há", 24),
    ("Status", 14),
    ("Cliente", 24),
    ("Total do pedido", 16),
    ("Ações", 0),
];

pub fn render_orders_table(page: &OrdersPage, now: DateTime<Utc>) -> String {
    let header: Vec<String> = HEADERS.iter().map(|(title, width)| pad(title, *width)).collect();
    let mut lines = vec![bold(header.concat().trim_end())];

    let rows = page.orders.iter().take(page.meta.per_page as usize);
    lines.extend(rows.map(|order| render_row(order, now)));
    if page.orders.is_empty() {
        lines.push("Nenhum pedido encontrado.".to_string());
    }

    lines.push(String::new());
    lines.push(render_pagination(&page.meta));
    lines.join("\n")
}

fn render_row(order: &OrderSummary, now: DateTime<Utc>) -> String {
    let actions: Vec<&str> = order.status.available_actions().iter().map(|a| a.label()).collect();
    let cells = [
        pad(&order.order_id, HEADERS[0].1),
        pad(&distance_to_now(order.created_at, now), HEADERS[1].1),
        pad(&render_status(order.status), HEADERS[2].1),
        pad(&order.customer_name, HEADERS[3].1),
        pad(&currency(order.total), HEADERS[4].1),
        actions.join(" | "),
    ];
    cells.concat().trim_end().to_string()
}

pub fn render_pagination(meta: &PageMeta) -> String {
    format!(
        "Total de {} item(s) · Página {} de {}",
        meta.total_count,
        meta.page_index + 1,
        meta.page_count()
    )
}
