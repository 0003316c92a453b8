//! pt-BR display formatting shared by the views.

use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};

/// Formats an amount in cents as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let reais = (cents / 100).to_formatted_string(&Locale::pt);
    format!("{}R$ {},{:02}", sign, reais, cents % 100)
}

/// Formats a delta percentage with an explicit sign, e.g. `+12%` or `-3,5%`.
pub fn percent_delta(diff: f64) -> String {
    let sign = if diff >= 0.0 { "+" } else { "-" };
    let magnitude = format!("{}", (diff.abs() * 10.0).round() / 10.0).replace('.', ",");
    format!("{}{}%", sign, magnitude)
}

/// Relative time in pt-BR with a suffix, e.g. `há 5 minutos` or `em cerca de 2 horas`.
pub fn distance_to_now(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();
    let distance = distance_words(seconds.unsigned_abs());
    if seconds >= 0 {
        format!("há {}", distance)
    } else {
        format!("em {}", distance)
    }
}

fn plural(count: u64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

fn distance_words(seconds: u64) -> String {
    const DAY: u64 = 1_440;
    const MONTH: u64 = 43_200;
    const TWO_MONTHS: u64 = 86_400;

    let minutes = (seconds + 30) / 60;
    match minutes {
        0 => "menos de um minuto".to_string(),
        m if m < 45 => plural(m, "1 minuto", "{} minutos"),
        m if m < 90 => "cerca de 1 hora".to_string(),
        m if m < DAY => plural((m + 30) / 60, "cerca de 1 hora", "cerca de {} horas"),
        m if m < 2_520 => "1 dia".to_string(),
        m if m < MONTH => plural((m + DAY / 2) / DAY, "1 dia", "{} dias"),
        m if m < TWO_MONTHS => plural((m + MONTH / 2) / MONTH, "cerca de 1 mês", "cerca de {} meses"),
        m if m / MONTH < 12 => plural((m + MONTH / 2) / MONTH, "1 mês", "{} meses"),
        m => {
            let months = m / MONTH;
            let years = months / 12;
            match months % 12 {
                r if r < 3 => plural(years, "cerca de 1 ano", "cerca de {} anos"),
                r if r < 9 => plural(years, "mais de 1 ano", "mais de {} anos"),
                _ => plural(years + 1, "quase 1 ano", "quase {} anos"),
            }
        }
    }
}
