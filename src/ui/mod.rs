//! Terminal views. Every view is a pure function from data to text.

pub mod dashboard;
pub mod error_page;
pub mod nav;
pub mod order_details;
pub mod order_status;
pub mod orders_table;
pub mod revenue_chart;
pub mod toast;

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::{Color, Stylize};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Turns ANSI colouring on for every view. Off by default so rendered text is plain.
pub fn enable_colors(enabled: bool) {
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn paint(text: impl Display, color: Color) -> String {
    if COLORS.load(Ordering::Relaxed) {
        text.to_string().with(color).to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn bold(text: impl Display) -> String {
    if COLORS.load(Ordering::Relaxed) {
        text.to_string().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Left-aligns `text` to `width` columns, counting chars rather than bytes.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Tailwind-ish palette used by the badges and charts.
pub mod palette {
    use crossterm::style::Color;

    pub const SLATE: Color = Color::Rgb { r: 148, g: 163, b: 184 };
    pub const ROSE: Color = Color::Rgb { r: 244, g: 63, b: 94 };
    pub const AMBER: Color = Color::Rgb { r: 245, g: 158, b: 11 };
    pub const VIOLET: Color = Color::Rgb { r: 139, g: 92, b: 246 };
    pub const EMERALD: Color = Color::Rgb { r: 16, g: 185, b: 129 };
}
