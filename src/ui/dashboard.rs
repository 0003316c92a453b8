use crossterm::style::Color;

use super::{bold, paint, palette, revenue_chart};
use crate::clients::DashboardMetrics;
use crate::domain::{DailyRevenue, PopularProduct};
use crate::format::{currency, percent_delta};

/// One summary card of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub diff: f64,
    pub comparison: &'static str,
    /// Cancellations going up is bad news.
    pub inverted: bool,
}

impl MetricCard {
    fn delta_color(&self) -> Color {
        if (self.diff >= 0.0) != self.inverted {
            palette::EMERALD
        } else {
            palette::ROSE
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n  {}\n  {} {}",
            bold(self.title),
            self.value,
            paint(percent_delta(self.diff), self.delta_color()),
            self.comparison
        )
    }
}

pub fn metric_cards(metrics: &DashboardMetrics) -> [MetricCard; 4] {
    const LAST_MONTH: &str = "em relação ao mês passado";
    [
        MetricCard {
            title: "Receita total (mês)",
            value: currency(metrics.month_revenue.receipt),
            diff: metrics.month_revenue.diff_from_last_month,
            comparison: LAST_MONTH,
            inverted: false,
        },
        MetricCard {
            title: "Pedidos (mês)",
            value: metrics.month_orders.amount.to_string(),
            diff: metrics.month_orders.diff_from_last_month,
            comparison: LAST_MONTH,
            inverted: false,
        },
        MetricCard {
            title: "Pedidos (dia)",
            value: metrics.day_orders.amount.to_string(),
            diff: metrics.day_orders.diff_from_yesterday,
            comparison: "em relação a ontem",
            inverted: false,
        },
        MetricCard {
            title: "Cancelamentos (mês)",
            value: metrics.month_canceled.amount.to_string(),
            diff: metrics.month_canceled.diff_from_last_month,
            comparison: LAST_MONTH,
            inverted: true,
        },
    ]
}

pub fn render_popular_products(products: &[PopularProduct]) -> String {
    let mut lines = vec![bold("Produtos populares")];
    if products.is_empty() {
        lines.push("Nenhum produto vendido.".to_string());
    }
    lines.extend(products.iter().map(|p| format!("  {} ({})", p.product, p.amount)));
    lines.join("\n")
}

pub fn render_daily_revenue(points: &[DailyRevenue]) -> String {
    let mut lines = vec![bold("Receita diária")];
    if points.is_empty() {
        lines.push("Sem receita no período.".to_string());
    }
    lines.extend(
        points
            .iter()
            .map(|p| format!("  {}  {}", p.date.format("%d/%m"), currency(p.receipt))),
    );
    lines.join("\n")
}

pub fn render_dashboard(metrics: &DashboardMetrics) -> String {
    let cards: Vec<String> = metric_cards(metrics).iter().map(MetricCard::render).collect();
    [
        bold("Dashboard"),
        cards.join("\n\n"),
        revenue_chart::render_revenue_chart(),
        render_popular_products(&metrics.popular_products),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount, MonthRevenue};
    use pretty_assertions::assert_eq;

    fn metrics() -> DashboardMetrics {
        DashboardMetrics {
            day_orders: DayOrdersAmount { amount: 12, diff_from_yesterday: -4.0 },
            month_orders: MonthOrdersAmount { amount: 240, diff_from_last_month: 8.0 },
            month_revenue: MonthRevenue { receipt: 1_234_56, diff_from_last_month: 12.5 },
            month_canceled: MonthCanceledOrdersAmount { amount: 3, diff_from_last_month: 2.0 },
            popular_products: vec![PopularProduct { product: "Calabresa".into(), amount: 40 }],
        }
    }

    #[test]
    fn test_revenue_card_text() {
        let cards = metric_cards(&metrics());
        assert_eq!(
            cards[0].render(),
            "Receita total (mês)\n  R$ 1.234,56\n  +12,5% em relação ao mês passado"
        );
        assert_eq!(cards[2].comparison, "em relação a ontem");
    }

    #[test]
    fn test_cancellations_invert_colors() {
        let cards = metric_cards(&metrics());
        assert_eq!(cards[1].delta_color(), palette::EMERALD);
        assert_eq!(cards[2].delta_color(), palette::ROSE);
        assert_eq!(cards[3].delta_color(), palette::ROSE);
    }

    #[test]
    fn test_dashboard_includes_chart_and_products() {
        let text = render_dashboard(&metrics());
        assert!(text.contains("Receita no período"));
        assert!(text.contains("  Calabresa (40)"));
    }
}
