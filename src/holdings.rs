//! Holdings view: current positions with server-computed valuation fields
//!
//! All derived numbers (market value, P/L, allocation) come from the backend
//! and are rendered verbatim; the client computes nothing.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::CryptoHolding;
use crate::app::{LoadState, Slot};
use crate::components::tables;
use crate::theme::Theme;

/// Holdings view state
pub struct HoldingsState {
    pub holdings: Slot<Vec<CryptoHolding>>,
    pub selected: usize,
    pub table: TableState,
}

impl HoldingsState {
    pub fn new() -> Self {
        Self {
            holdings: Slot::new(),
            selected: 0,
            table: TableState::default(),
        }
    }

    pub fn move_selection(&mut self, step: i32) {
        let len = self.holdings.data().map(|h| h.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let next = (self.selected as i32 + step).rem_euclid(len as i32) as usize;
        self.selected = next;
    }

    pub fn clamp_selection(&mut self) {
        let len = self.holdings.data().map(|h| h.len()).unwrap_or(0);
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for HoldingsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &mut HoldingsState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Current Holdings");

    match state.holdings.state() {
        LoadState::Loaded(holdings) if !holdings.is_empty() => {
            let header = Row::new(vec![
                "Currency",
                "Quantity",
                "Buy Price",
                "Price",
                "Market Value",
                "P/L",
                "P/L %",
                "Alloc %",
                "Updated",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD));

            let rows: Vec<Row> = holdings
                .iter()
                .map(|h| holding_row(h, theme))
                .collect();

            let widths = [
                Constraint::Length(10),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Min(16),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            state.table.select(Some(state.selected));
            f.render_stateful_widget(table, area, &mut state.table);
        }
        LoadState::Loaded(_) => {
            f.render_widget(Paragraph::new("暂无数据").block(block), area);
        }
        LoadState::Loading => {
            f.render_widget(Paragraph::new("loading…").block(block), area);
        }
        LoadState::Error(e) => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    format!("load failed: {}", e),
                    Style::default().fg(theme.negative),
                ))
                .block(block),
                area,
            );
        }
        LoadState::NotLoaded => {
            f.render_widget(Paragraph::new("暂无数据").block(block), area);
        }
    }
}

fn holding_row<'a>(holding: &'a CryptoHolding, theme: &Theme) -> Row<'a> {
    Row::new(vec![
        Cell::from(holding.currency_type.clone()),
        Cell::from(format!("{:.8}", holding.quantity)),
        Cell::from(tables::format_usd(holding.purchase_price)),
        Cell::from(tables::format_usd(holding.current_price)),
        Cell::from(tables::format_usd(holding.market_value)),
        Cell::from(tables::signed_usd_span(holding.profit_loss, theme)),
        Cell::from(tables::signed_pct_span(
            holding.profit_loss_rate * 100.0,
            theme,
        )),
        Cell::from(format!("{:.1}%", holding.allocation_percentage)),
        Cell::from(tables::muted_span(holding.last_updated.clone(), theme)),
    ])
}
