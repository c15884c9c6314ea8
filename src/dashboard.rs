//! Dashboard view: portfolio overview, allocation, value history, latest
//! market news and the pending rebalancing suggestion with its approval
//! modal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::{HistoricalPoint, InvestmentSuggestion, MarketNews, PortfolioOverview};
use crate::app::{LoadState, Slot};
use crate::components::{charts, modals, tables};
use crate::news::truncate_content;
use crate::theme::Theme;

/// Number of news items previewed on the dashboard
const NEWS_PREVIEW_COUNT: usize = 6;

/// Dashboard view state: one slot per widget, loaded in parallel
pub struct DashboardState {
    pub overview: Slot<PortfolioOverview>,
    pub history: Slot<Vec<HistoricalPoint>>,
    pub suggestion: Slot<InvestmentSuggestion>,
    pub news: Slot<Vec<MarketNews>>,
    pub show_suggestion_detail: bool,
    /// Suggestion id with an outstanding decision request, if any.
    /// At most one decision request per entity is ever in flight.
    pub decision_in_flight: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            overview: Slot::new(),
            history: Slot::new(),
            suggestion: Slot::new(),
            news: Slot::new(),
            show_suggestion_detail: false,
            decision_in_flight: None,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(40),
            Constraint::Min(0),
        ])
        .split(area);

    render_stat_tiles(f, rows[0], state, theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    render_allocation(f, middle[0], state, theme);
    render_history(f, middle[1], state, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_suggestion_card(f, bottom[0], state, theme);
    render_news_preview(f, bottom[1], state, theme);

    if state.show_suggestion_detail {
        render_suggestion_modal(f, state, theme);
    }
}

fn render_stat_tiles(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    match state.overview.state() {
        LoadState::Loaded(overview) => {
            stat_tile(
                f,
                tiles[0],
                "Total Value",
                tables::format_usd(overview.total_value),
                Style::default().fg(theme.positive),
            );
            stat_tile(
                f,
                tiles[1],
                "24h Change",
                format!(
                    "{}{}",
                    if overview.total_change24h >= 0.0 { "+" } else { "" },
                    tables::format_usd(overview.total_change24h)
                ),
                theme.change_style(overview.total_change24h),
            );
            stat_tile(
                f,
                tiles[2],
                "24h Change %",
                tables::format_signed_pct(overview.total_change_percentage24h),
                theme.change_style(overview.total_change_percentage24h),
            );
        }
        other => {
            let text = placeholder_text(other);
            for (i, title) in ["Total Value", "24h Change", "24h Change %"].iter().enumerate() {
                stat_tile(f, tiles[i], title, text.to_string(), theme.muted_style());
            }
        }
    }
}

fn stat_tile(f: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        style.add_modifier(Modifier::BOLD),
    )))
    .block(block);
    f.render_widget(paragraph, area);
}

fn render_allocation(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    match state.overview.state() {
        LoadState::Loaded(overview) if !overview.asset_allocation.is_empty() => {
            let data: Vec<(&str, u64)> = overview
                .asset_allocation
                .iter()
                .map(|a| (a.symbol.as_str(), a.percentage.round() as u64))
                .collect();
            f.render_widget(charts::allocation_bars(&data, theme), area);
        }
        other => {
            render_placeholder(f, area, "Asset Allocation (%)", placeholder_text(other), theme)
        }
    }
}

fn render_history(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    match state.history.state() {
        LoadState::Loaded(points) if !points.is_empty() => {
            let series: Vec<(f64, f64)> = points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.total_value))
                .collect();
            let first = points.first().map(|p| p.date.clone()).unwrap_or_default();
            let last = points.last().map(|p| p.date.clone()).unwrap_or_default();
            f.render_widget(charts::history_chart(&series, first, last, theme), area);
        }
        other => render_placeholder(f, area, "Total Value History", placeholder_text(other), theme),
    }
}

fn render_suggestion_card(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Investment Suggestion");
    match state.suggestion.state() {
        LoadState::Loaded(suggestion) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(format!("Date: {}   Status: ", suggestion.date)),
                    Span::styled(
                        status_label(suggestion),
                        theme.status_style(suggestion.status),
                    ),
                ]),
                Line::from(Span::raw(suggestion.summary.clone())),
                Line::default(),
            ];
            for adj in &suggestion.assets_to_increase {
                lines.push(Line::from(vec![
                    Span::styled("▲ ", Style::default().fg(theme.positive)),
                    Span::raw(format!(
                        "{}: {:.1}% → {:.1}%",
                        adj.symbol, adj.current_percentage, adj.suggested_percentage
                    )),
                ]));
            }
            for adj in &suggestion.assets_to_decrease {
                lines.push(Line::from(vec![
                    Span::styled("▼ ", Style::default().fg(theme.negative)),
                    Span::raw(format!(
                        "{}: {:.1}% → {:.1}%",
                        adj.symbol, adj.current_percentage, adj.suggested_percentage
                    )),
                ]));
            }
            if suggestion.status.is_pending() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "[enter] review & decide",
                    theme.muted_style(),
                )));
            }
            f.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .wrap(ratatui::widgets::Wrap { trim: false }),
                area,
            );
        }
        other => {
            let paragraph = Paragraph::new(placeholder_text(other)).block(block);
            f.render_widget(paragraph, area);
        }
    }
}

fn render_news_preview(f: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let block = Block::default().borders(Borders::ALL).title("Market News");
    match state.news.state() {
        LoadState::Loaded(news) if !news.is_empty() => {
            let mut lines = Vec::new();
            for item in news.iter().take(NEWS_PREVIEW_COUNT) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", item.sentiment.as_str()),
                        theme.sentiment_style(item.sentiment),
                    ),
                    Span::raw(item.title.clone()),
                ]));
                lines.push(Line::from(Span::raw(format!(
                    "  {}",
                    truncate_content(&item.content, 80)
                ))));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} · {} · {}",
                        item.source,
                        item.published_at,
                        item.related_coins.join(",")
                    ),
                    theme.muted_style(),
                )));
            }
            f.render_widget(Paragraph::new(lines).block(block), area);
        }
        LoadState::Loaded(_) => {
            f.render_widget(Paragraph::new("暂无市场消息").block(block), area);
        }
        other => {
            f.render_widget(Paragraph::new(placeholder_text(other)).block(block), area);
        }
    }
}

fn render_suggestion_modal(f: &mut Frame, state: &DashboardState, theme: &Theme) {
    let Some(suggestion) = state.suggestion.data() else {
        return;
    };
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("Date: {}   Status: ", suggestion.date)),
            Span::styled(
                status_label(suggestion),
                theme.status_style(suggestion.status),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled("Summary", theme.title_style())),
        Line::from(Span::raw(suggestion.summary.clone())),
        Line::default(),
        Line::from(Span::styled("Increase", theme.title_style())),
    ];
    for adj in &suggestion.assets_to_increase {
        lines.push(Line::from(Span::raw(format!(
            "  {} {:.1}% → {:.1}%  ({})",
            adj.symbol, adj.current_percentage, adj.suggested_percentage, adj.reason
        ))));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Decrease", theme.title_style())));
    for adj in &suggestion.assets_to_decrease {
        lines.push(Line::from(Span::raw(format!(
            "  {} {:.1}% → {:.1}%  ({})",
            adj.symbol, adj.current_percentage, adj.suggested_percentage, adj.reason
        ))));
    }
    lines.push(Line::default());
    if suggestion.status.is_pending() {
        lines.push(Line::from(Span::styled(
            modals::decision_footer(state.decision_in_flight.is_some()),
            theme.muted_style(),
        )));
    } else {
        // Terminal state: no transition is offered.
        lines.push(Line::from(Span::styled(
            "[esc] close",
            theme.muted_style(),
        )));
    }
    modals::render_modal(f, "Suggestion Detail", lines, theme, (70, 70));
}

fn status_label(suggestion: &InvestmentSuggestion) -> String {
    match (&suggestion.approved_by, &suggestion.approval_time) {
        (Some(by), Some(at)) => format!("{:?} by {} at {}", suggestion.status, by, at),
        _ => format!("{:?}", suggestion.status),
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, title: &str, text: &str, _theme: &Theme) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn placeholder_text<T>(state: &LoadState<T>) -> &str {
    match state {
        LoadState::Loading => "loading…",
        LoadState::Error(_) => "load failed",
        _ => "暂无数据",
    }
}
