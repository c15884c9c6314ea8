//! Table cell helpers shared by the holdings and report views

use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme::Theme;

/// Dollar amount with thousands separators, e.g. `$1,000,000.00`
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, frac)
    } else {
        format!("${}.{:02}", grouped, frac)
    }
}

/// Signed percentage string, e.g. `+3.20%` / `-1.20%`
pub fn format_signed_pct(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Span for a signed dollar amount, colored by sign
pub fn signed_usd_span(value: f64, theme: &Theme) -> Span<'static> {
    let text = if value >= 0.0 {
        format!("+{}", format_usd(value))
    } else {
        format_usd(value)
    };
    Span::styled(text, theme.change_style(value))
}

/// Span for a signed percentage, colored by sign
pub fn signed_pct_span(value: f64, theme: &Theme) -> Span<'static> {
    Span::styled(format_signed_pct(value), theme.change_style(value))
}

/// Muted span for secondary cells
pub fn muted_span(text: String, theme: &Theme) -> Span<'static> {
    Span::styled(text, Style::default().fg(theme.text_muted))
}
