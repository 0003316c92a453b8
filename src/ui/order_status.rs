use crossterm::style::Color;

use super::{paint, palette};
use crate::domain::OrderStatus;

/// Label and dot colour shown for an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub description: &'static str,
    pub background: Color,
}

pub fn status_badge(status: OrderStatus) -> StatusBadge {
    let (description, background) = match status {
        OrderStatus::Pending => ("Pendente", palette::SLATE),
        OrderStatus::Canceled => ("Cancelado", palette::ROSE),
        OrderStatus::Processing => ("Em preparo", palette::AMBER),
        OrderStatus::Delivering => ("Em entrega", palette::VIOLET),
        OrderStatus::Delivered => ("Entregue", palette::EMERALD),
    };
    StatusBadge { description, background }
}

pub fn render_status(status: OrderStatus) -> String {
    let badge = status_badge(status);
    format!("{} {}", paint("●", badge.background), badge.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_badge_mapping_is_total_and_distinct() {
        let badges: Vec<StatusBadge> = OrderStatus::ALL.into_iter().map(status_badge).collect();

        assert!(badges.iter().all(|b| !b.description.is_empty()));
        let backgrounds: HashSet<String> = badges.iter().map(|b| format!("{:?}", b.background)).collect();
        assert_eq!(backgrounds.len(), OrderStatus::ALL.len());
        let descriptions: HashSet<&str> = badges.iter().map(|b| b.description).collect();
        assert_eq!(descriptions.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_render_status_plain() {
        assert_eq!(render_status(OrderStatus::Processing), "● Em preparo");
    }
}
