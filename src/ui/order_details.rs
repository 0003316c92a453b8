use chrono::{DateTime, Utc};

use super::order_status::render_status;
use super::{bold, pad};
use crate::domain::OrderDetails;
use crate::format::{currency, distance_to_now};

pub fn render_order_details(order: &OrderDetails, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        bold(format!("Pedido: {}", order.id)),
        "Detalhes do pedido".to_string(),
        String::new(),
        format!("{}{}", pad("Status", 16), render_status(order.status)),
        format!("{}{}", pad("Cliente", 16), order.customer.name),
        format!(
            "{}{}",
            pad("Telefone", 16),
            order.customer.phone.as_deref().unwrap_or("Não informado")
        ),
        format!("{}{}", pad("E-mail", 16), order.customer.email),
        format!("{}{}", pad("Realizado há", 16), distance_to_now(order.created_at, now)),
        String::new(),
        bold(format!(
            "{}{}{}{}",
            pad("Produto", 28),
            pad("Qtd.", 6),
            pad("Preço", 14),
            "Subtotal"
        )),
    ];

    for item in &order.order_items {
        lines.push(format!(
            "{}{}{}{}",
            pad(&item.product.name, 28),
            pad(&item.quantity.to_string(), 6),
            pad(&currency(item.price_in_cents), 14),
            currency(item.subtotal_in_cents())
        ));
    }

    lines.push(String::new());
    lines.push(format!("{}{}", pad("Total do pedido", 48), currency(order.total_in_cents)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, OrderItem, OrderStatus, ProductRef};

    #[test]
    fn test_renders_items_and_totals() {
        let now = Utc::now();
        let order = OrderDetails {
            id: "o1".into(),
            created_at: now,
            status: OrderStatus::Delivered,
            total_in_cents: 9180,
            customer: Customer { name: "Ana".into(), email: "ana@mail.com".into(), phone: None },
            order_items: vec![OrderItem {
                id: "i1".into(),
                price_in_cents: 4590,
                quantity: 2,
                product: ProductRef { name: "Pizza Margherita".into() },
            }],
        };

        let text = render_order_details(&order, now);

        assert!(text.contains("Não informado"));
        assert!(text.contains("● Entregue"));
        assert!(text.contains("Pizza Margherita"));
        assert!(text.contains("R$ 45,90"));
        assert!(text.ends_with("R$ 91,80"));
    }
}
