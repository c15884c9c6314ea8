//! Market news view: paginated feed with sentiment filter, session-local
//! favorites and the Dify fetch trigger.

use std::collections::HashSet;

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::{MarketNews, Page, Sentiment};
use crate::app::{LoadState, Slot};
use crate::components::tables;
use crate::theme::Theme;

/// Session-local set of favorited news ids. Never persisted; toggling the
/// same id twice restores the prior state.
#[derive(Debug, Default, Clone)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership; returns true when the id is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// News view state
pub struct NewsState {
    pub items: Slot<Page<MarketNews>>,
    pub favorites: FavoriteSet,
    pub sentiment_filter: Option<Sentiment>,
    pub selected: usize,
    pub table: TableState,
}

impl NewsState {
    pub fn new() -> Self {
        Self {
            items: Slot::new(),
            favorites: FavoriteSet::new(),
            sentiment_filter: None,
            selected: 0,
            table: TableState::default(),
        }
    }

    pub fn move_selection(&mut self, step: i32) {
        let len = self.items.data().map(|p| p.rows.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        self.selected = (self.selected as i32 + step).rem_euclid(len as i32) as usize;
    }

    pub fn clamp_selection(&mut self) {
        let len = self.items.data().map(|p| p.rows.len()).unwrap_or(0);
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Advance the sentiment filter: all → positive → negative → neutral → all.
    /// The new filter is forwarded to the backend on the next fetch; nothing
    /// is re-filtered client-side.
    pub fn cycle_sentiment_filter(&mut self) {
        self.sentiment_filter = match self.sentiment_filter {
            None => Some(Sentiment::Positive),
            Some(Sentiment::Positive) => Some(Sentiment::Negative),
            Some(Sentiment::Negative) => Some(Sentiment::Neutral),
            Some(Sentiment::Neutral) => None,
        };
    }

    /// Toggle the favorite flag on the selected item; returns the
    /// notification text on success
    pub fn toggle_selected_favorite(&mut self) -> Option<String> {
        let id = self
            .items
            .data()
            .and_then(|p| p.rows.get(self.selected))
            .map(|item| item.id.clone())?;
        let added = self.favorites.toggle(&id);
        Some(if added { "收藏成功" } else { "取消收藏成功" }.to_string())
    }
}

impl Default for NewsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosmetic truncation for long content, char-boundary safe
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

pub fn render(f: &mut Frame, area: Rect, state: &mut NewsState, theme: &Theme) {
    let filter_label = match state.sentiment_filter {
        None => "all",
        Some(s) => s.as_str(),
    };
    let title = format!(
        "Market News — filter: {} · [f] favorite · [s] sentiment · [d] dify fetch",
        filter_label
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    match state.items.state() {
        LoadState::Loaded(page) if !page.rows.is_empty() => {
            let header = Row::new(vec!["★", "Sentiment", "Title", "Coins", "Source", "Published"])
                .style(Style::default().add_modifier(Modifier::BOLD));
            let rows: Vec<Row> = page
                .rows
                .iter()
                .map(|item| news_row(item, &state.favorites, theme))
                .collect();
            let widths = [
                Constraint::Length(3),
                Constraint::Length(10),
                Constraint::Percentage(45),
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Min(18),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            state.table.select(Some(state.selected));
            f.render_stateful_widget(table, area, &mut state.table);
        }
        LoadState::Loaded(_) => {
            f.render_widget(Paragraph::new("暂无市场消息").block(block), area);
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
            f.render_widget(Paragraph::new("暂无市场消息").block(block), area);
        }
    }
}

fn news_row<'a>(item: &'a MarketNews, favorites: &FavoriteSet, theme: &Theme) -> Row<'a> {
    let star = if favorites.contains(&item.id) {
        Span::styled("★", Style::default().fg(theme.warning))
    } else {
        Span::styled("☆", theme.muted_style())
    };
    Row::new(vec![
        Cell::from(star),
        Cell::from(Span::styled(
            item.sentiment.as_str(),
            theme.sentiment_style(item.sentiment),
        )),
        Cell::from(truncate_content(&item.title, 60)),
        Cell::from(item.related_coins.join(",")),
        Cell::from(item.source.clone()),
        Cell::from(tables::muted_span(item.published_at.clone(), theme)),
    ])
}
