//! Chart helpers for allocation and value-history visuals

use ratatui::style::Style;
use ratatui::symbols;
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType};

use crate::theme::Theme;

/// Asset allocation as a bar chart of percentages
pub fn allocation_bars<'a>(data: &'a [(&'a str, u64)], theme: &Theme) -> BarChart<'a> {
    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Asset Allocation (%)"),
        )
        .data(data)
        .bar_width(7)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.text))
}

/// Total-value history as a line chart. `points` are (index, value) pairs;
/// labels carry the first/last date of the window.
pub fn history_chart<'a>(
    points: &'a [(f64, f64)],
    first_label: String,
    last_label: String,
    theme: &Theme,
) -> Chart<'a> {
    let (min, max) = value_bounds(points);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(points);
    Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Total Value History"),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, points.len().saturating_sub(1).max(1) as f64])
                .labels(vec![first_label, last_label]),
        )
        .y_axis(
            Axis::default()
                .bounds([min, max])
                .labels(vec![format!("{:.0}", min), format!("{:.0}", max)]),
        )
}

fn value_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for (_, v) in points {
        min = min.min(*v);
        max = max.max(*v);
    }
    if points.is_empty() || min > max {
        return (0.0, 1.0);
    }
    // Pad so a flat series still renders a visible line.
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}
