//! Analysis reports view: paged report list, detail modal, audit decision
//! modal and spreadsheet export.
//!
//! The audit surface is offered only for reports still pending review; a
//! decided report exposes its audit trail instead.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::{AnalysisReport, ApprovalStatus, Page, ReportListParams, RiskLevel};
use crate::app::{LoadState, Slot};
use crate::components::{modals, tables};
use crate::theme::Theme;

/// Reports view state
pub struct ReportsState {
    pub page: Slot<Page<AnalysisReport>>,
    pub selected: usize,
    pub table: TableState,
    pub page_num: u32,
    pub page_size: u32,
    pub detail_open: bool,
    pub audit_open: bool,
    /// Report id with an outstanding audit request, if any.
    /// At most one decision request per entity is ever in flight.
    pub audit_in_flight: Option<i64>,
}

impl ReportsState {
    pub fn new() -> Self {
        Self {
            page: Slot::new(),
            selected: 0,
            table: TableState::default(),
            page_num: 1,
            page_size: 10,
            detail_open: false,
            audit_open: false,
            audit_in_flight: None,
        }
    }

    /// Filter/pagination parameters forwarded verbatim to the backend
    pub fn list_params(&self) -> ReportListParams {
        ReportListParams {
            page_num: Some(self.page_num),
            page_size: Some(self.page_size),
            ..Default::default()
        }
    }

    pub fn selected_report(&self) -> Option<&AnalysisReport> {
        self.page.data().and_then(|p| p.rows.get(self.selected))
    }

    pub fn move_selection(&mut self, step: i32) {
        let len = self.page.data().map(|p| p.rows.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        self.selected = (self.selected as i32 + step).rem_euclid(len as i32) as usize;
    }

    pub fn clamp_selection(&mut self) {
        let len = self.page.data().map(|p| p.rows.len()).unwrap_or(0);
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for ReportsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &mut ReportsState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Reports — [enter] detail · [u] audit · [e] export");

    match state.page.state() {
        LoadState::Loaded(page) if !page.rows.is_empty() => {
            let header = Row::new(vec!["Date", "Total Value", "24h", "Risk", "Audit", "Action"])
                .style(Style::default().add_modifier(Modifier::BOLD));
            let rows: Vec<Row> = page.rows.iter().map(|r| report_row(r, theme)).collect();
            let widths = [
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Min(10),
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

    if state.detail_open {
        render_detail_modal(f, state, theme);
    }
    if state.audit_open {
        render_audit_modal(f, state, theme);
    }
}

fn report_row<'a>(report: &'a AnalysisReport, theme: &Theme) -> Row<'a> {
    // Decided rows carry no action: pending -> approved/rejected is one-way.
    let action = if report.audit_status.is_pending() {
        Span::styled("audit", Style::default().fg(theme.accent))
    } else {
        Span::styled("—", theme.muted_style())
    };
    Row::new(vec![
        Cell::from(report.report_date.clone()),
        Cell::from(tables::format_usd(report.current_total_value)),
        Cell::from(tables::signed_pct_span(report.daily_change, theme)),
        Cell::from(Span::styled(
            risk_label(report.risk_level),
            theme.risk_style(report.risk_level),
        )),
        Cell::from(Span::styled(
            status_label(report.audit_status),
            theme.status_style(report.audit_status),
        )),
        Cell::from(action),
    ])
}

fn render_detail_modal(f: &mut Frame, state: &ReportsState, theme: &Theme) {
    let Some(report) = state.selected_report() else {
        return;
    };
    let mut lines = vec![
        Line::from(format!("Report date: {}", report.report_date)),
        Line::from(format!(
            "Total value: {}",
            tables::format_usd(report.current_total_value)
        )),
        Line::from(vec![
            Span::raw("Daily change: "),
            tables::signed_pct_span(report.daily_change, theme),
        ]),
        Line::from(vec![
            Span::raw("Risk level: "),
            Span::styled(
                risk_label(report.risk_level),
                theme.risk_style(report.risk_level),
            ),
        ]),
        Line::from(vec![
            Span::raw("Audit status: "),
            Span::styled(
                status_label(report.audit_status),
                theme.status_style(report.audit_status),
            ),
        ]),
    ];
    if !report.audit_status.is_pending() {
        if let Some(by) = &report.audit_by {
            lines.push(Line::from(format!("Audited by: {}", by)));
        }
        if let Some(at) = &report.audit_time {
            lines.push(Line::from(format!("Audited at: {}", at)));
        }
        if let Some(remark) = &report.audit_remark {
            lines.push(Line::from(format!("Remark: {}", remark)));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Market Summary", theme.title_style())));
    lines.push(Line::from(report.market_summary.clone()));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Suggested Adjustments",
        theme.title_style(),
    )));
    lines.push(Line::from(report.suggested_adjustments.clone()));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[esc] close", theme.muted_style())));

    modals::render_modal(f, "Report Detail", lines, theme, (70, 70));
}

fn render_audit_modal(f: &mut Frame, state: &ReportsState, theme: &Theme) {
    let Some(report) = state.selected_report() else {
        return;
    };
    let lines = vec![
        Line::from(format!(
            "Approve or reject the report dated {}?",
            report.report_date
        )),
        Line::default(),
        Line::from(Span::styled(
            modals::decision_footer(state.audit_in_flight.is_some()),
            theme.muted_style(),
        )),
    ];
    modals::render_modal(f, "Audit Report", lines, theme, (50, 25));
}

fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
    }
}

fn status_label(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => "pending",
        ApprovalStatus::Approved => "approved",
        ApprovalStatus::Rejected => "rejected",
    }
}
