use super::{bold, paint, palette};
use crate::format::currency;

const BAR_WIDTH: i64 = 40;

/// Illustrative daily revenue series (in reais) drawn by the chart.
pub const SAMPLE_SERIES: [(&str, i64); 7] = [
    ("10/01", 2000),
    ("11/01", 4000),
    ("12/01", 1000),
    ("13/01", 6000),
    ("14/01", 2000),
    ("15/01", 8000),
    ("16/01", 9000),
];

/// Revenue card. Draws [`SAMPLE_SERIES`], not the fetched period data.
pub fn render_revenue_chart() -> String {
    let max = SAMPLE_SERIES.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let mut lines = vec![
        bold("Receita no período"),
        "Receita diária no período".to_string(),
        String::new(),
    ];

    for (date, revenue) in SAMPLE_SERIES {
        let filled = (revenue * BAR_WIDTH / max) as usize;
        let bar = format!("{}{}", "■".repeat(filled), " ".repeat(BAR_WIDTH as usize - filled));
        lines.push(format!("{} │{} {}", date, paint(bar, palette::VIOLET), currency(revenue * 100)));
    }
    lines.join("\n")
}
