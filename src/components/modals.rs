//! Modal dialog helpers
//!
//! Centered overlay surfaces used for detail views and decision
//! confirmations. Escape closes; decision keys are handled by the caller.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::Theme;

/// Rectangle centered in `r`, sized as percentages of it
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw a bordered modal over the current frame with the given content lines
pub fn render_modal(f: &mut Frame, title: &str, lines: Vec<Line>, theme: &Theme, size: (u16, u16)) {
    let area = centered_rect(size.0, size.1, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(theme.accent))
        .title(format!(" {} ", title));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Footer line offered inside a confirmation modal while a decision is
/// still possible
pub fn decision_footer(in_flight: bool) -> &'static str {
    if in_flight {
        "submitting…"
    } else {
        "[a] approve · [x] reject · [esc] cancel"
    }
}
