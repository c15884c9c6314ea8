//! Application state and event dispatch for the coinlens terminal UI
//!
//! Holds the per-view snapshots fetched from the backend, routes keyboard
//! actions, and applies the results that worker tasks send back over the
//! event channel. Nothing here performs I/O directly: fetches and mutations
//! are spawned onto the tokio runtime and come back as [`AppEvent`]s.

use std::path::PathBuf;
use std::sync::Arc;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{
    AnalysisReport, ApiError, ApproveSuggestionParams, ApprovalStatus, AuditDecision,
    AuditRequest, CryptoHolding, HistoricalPoint, HistoryQuery, InvestmentSuggestion, MarketNews,
    NewsQuery, Page, PortfolioOverview, PortfolioService,
};
use crate::dashboard::{self, DashboardState};
use crate::holdings::{self, HoldingsState};
use crate::keyboard::KeyboardAction;
use crate::news::{self, NewsState};
use crate::reports::{self, ReportsState};
use crate::theme::Theme;

/// Loading state for async data
#[derive(Debug, Clone, Default)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Outcome of applying a fetch result to a [`Slot`]
#[derive(Debug, PartialEq, Eq)]
pub enum SlotOutcome {
    Updated,
    /// A newer request superseded this response; it was dropped as a no-op
    Stale,
    Failed(String),
}

/// One widget's data slot: last-fetched snapshot plus the bookkeeping that
/// keeps a widget's fetch from re-entering while one is outstanding and
/// drops responses that arrive after a newer request started.
#[derive(Debug, Default)]
pub struct Slot<T> {
    data: LoadState<T>,
    seq: u64,
    in_flight: bool,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self {
            data: LoadState::NotLoaded,
            seq: 0,
            in_flight: false,
        }
    }

    /// Start a fetch. Returns the sequence token to stamp on the response,
    /// or `None` when a fetch is already outstanding.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.seq += 1;
        // A refreshing widget keeps showing last-known data.
        if !self.data.is_loaded() {
            self.data = LoadState::Loading;
        }
        Some(self.seq)
    }

    /// Apply a fetch result. Responses carrying a superseded token are
    /// dropped without touching the snapshot or the in-flight flag (the
    /// newer request owns both).
    pub fn finish(&mut self, seq: u64, result: Result<T, ApiError>) -> SlotOutcome {
        if seq != self.seq {
            return SlotOutcome::Stale;
        }
        self.in_flight = false;
        match result {
            Ok(data) => {
                self.data = LoadState::Loaded(data);
                SlotOutcome::Updated
            }
            Err(e) => {
                let msg = e.to_string();
                // A failed refresh keeps the last-known snapshot visible.
                if !self.data.is_loaded() {
                    self.data = LoadState::Error(msg.clone());
                }
                SlotOutcome::Failed(msg)
            }
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.data
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self.data {
            LoadState::Loaded(ref mut data) => Some(data),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

/// Results delivered back from worker tasks
#[derive(Debug)]
pub enum AppEvent {
    Overview {
        seq: u64,
        result: Result<PortfolioOverview, ApiError>,
    },
    History {
        seq: u64,
        result: Result<Vec<HistoricalPoint>, ApiError>,
    },
    Suggestion {
        seq: u64,
        result: Result<InvestmentSuggestion, ApiError>,
    },
    NewsPreview {
        seq: u64,
        result: Result<Vec<MarketNews>, ApiError>,
    },
    Holdings {
        seq: u64,
        result: Result<Vec<CryptoHolding>, ApiError>,
    },
    Reports {
        seq: u64,
        result: Result<Page<AnalysisReport>, ApiError>,
    },
    NewsList {
        seq: u64,
        result: Result<Page<MarketNews>, ApiError>,
    },
    SuggestionDecided {
        id: String,
        status: ApprovalStatus,
        result: Result<(), ApiError>,
    },
    ReportAudited {
        id: i64,
        decision: AuditDecision,
        result: Result<(), ApiError>,
    },
    MarketRefreshed(Result<(), ApiError>),
    ExportFinished(Result<PathBuf, String>),
    DifyFetched(Result<(), ApiError>),
}

/// Active view/tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Holdings,
    Reports,
    News,
}

impl ActiveView {
    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dashboard => "Dashboard",
            ActiveView::Holdings => "Holdings",
            ActiveView::Reports => "Reports",
            ActiveView::News => "News",
        }
    }

    pub fn all() -> &'static [ActiveView] {
        &[
            ActiveView::Dashboard,
            ActiveView::Holdings,
            ActiveView::Reports,
            ActiveView::News,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status-line message, replaced by the next one
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// Main application state
pub struct App {
    service: Arc<dyn PortfolioService>,
    runtime: Handle,
    tx: UnboundedSender<AppEvent>,
    /// Name stamped on locally patched decisions; the server's own audit
    /// fields overwrite it on the next fetch.
    reviewer: String,

    pub active_view: ActiveView,
    pub theme: Theme,
    pub should_quit: bool,
    pub notice: Option<Notice>,

    pub dashboard: DashboardState,
    pub holdings: HoldingsState,
    pub reports: ReportsState,
    pub news: NewsState,
}

impl App {
    pub fn new(
        service: Arc<dyn PortfolioService>,
        runtime: Handle,
        tx: UnboundedSender<AppEvent>,
        reviewer: String,
    ) -> Self {
        Self {
            service,
            runtime,
            tx,
            reviewer,
            active_view: ActiveView::default(),
            theme: Theme::dark(),
            should_quit: false,
            notice: None,
            dashboard: DashboardState::new(),
            holdings: HoldingsState::new(),
            reports: ReportsState::new(),
            news: NewsState::new(),
        }
    }

    fn success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Success,
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::warn!("{}", text);
        self.notice = Some(Notice {
            text,
            kind: NoticeKind::Error,
        });
    }

    // ------------------------------------------------------------------
    // Fetch dispatch
    // ------------------------------------------------------------------

    /// Load every widget of the dashboard in parallel
    pub fn load_dashboard(&mut self) {
        if let Some(seq) = self.dashboard.overview.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = service.portfolio_overview().await;
                let _ = tx.send(AppEvent::Overview { seq, result });
            });
        }
        if let Some(seq) = self.dashboard.history.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = service
                    .historical_data(HistoryQuery {
                        days: Some(15),
                        ..Default::default()
                    })
                    .await;
                let _ = tx.send(AppEvent::History { seq, result });
            });
        }
        if let Some(seq) = self.dashboard.suggestion.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = service.latest_suggestion().await;
                let _ = tx.send(AppEvent::Suggestion { seq, result });
            });
        }
        if let Some(seq) = self.dashboard.news.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = service.currency_news(None).await;
                let _ = tx.send(AppEvent::NewsPreview { seq, result });
            });
        }
    }

    pub fn load_holdings(&mut self) {
        if let Some(seq) = self.holdings.holdings.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let result = service.current_holdings().await;
                let _ = tx.send(AppEvent::Holdings { seq, result });
            });
        }
    }

    pub fn load_reports(&mut self) {
        if let Some(seq) = self.reports.page.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            let params = self.reports.list_params();
            self.runtime.spawn(async move {
                let result = service.list_reports(params).await;
                let _ = tx.send(AppEvent::Reports { seq, result });
            });
        }
    }

    pub fn load_news(&mut self) {
        if let Some(seq) = self.news.items.begin() {
            let service = self.service.clone();
            let tx = self.tx.clone();
            let query = NewsQuery {
                page_size: Some(50),
                current: Some(1),
                symbols: Vec::new(),
                sentiment: self.news.sentiment_filter,
            };
            self.runtime.spawn(async move {
                let result = service.market_news(query).await;
                let _ = tx.send(AppEvent::NewsList { seq, result });
            });
        }
    }

    fn load_active_view(&mut self) {
        match self.active_view {
            ActiveView::Dashboard => self.load_dashboard(),
            ActiveView::Holdings => self.load_holdings(),
            ActiveView::Reports => self.load_reports(),
            ActiveView::News => self.load_news(),
        }
    }

    /// Ask the backend to refresh market data, then reload the dashboard
    fn refresh_market_data(&mut self) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.refresh_market_data().await;
            let _ = tx.send(AppEvent::MarketRefreshed(result));
        });
    }

    // ------------------------------------------------------------------
    // Approval workflow
    // ------------------------------------------------------------------

    /// Submit a decision on the currently shown suggestion.
    ///
    /// The action is offered only while the suggestion is pending and no
    /// decision request is outstanding for it; a repeated key press while one
    /// is in flight is ignored, so a double-press cannot submit twice.
    pub fn submit_suggestion_decision(&mut self, status: ApprovalStatus) {
        let Some(suggestion) = self.dashboard.suggestion.data() else {
            return;
        };
        if !suggestion.status.is_pending() {
            return;
        }
        if self.dashboard.decision_in_flight.is_some() {
            return;
        }
        let id = suggestion.id.clone();
        self.dashboard.decision_in_flight = Some(id.clone());
        let params = ApproveSuggestionParams {
            suggestion_id: id.clone(),
            status,
            comments: None,
        };
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.approve_suggestion(params).await;
            let _ = tx.send(AppEvent::SuggestionDecided { id, status, result });
        });
    }

    /// Submit an audit decision on the selected report, same guard rules
    /// as [`Self::submit_suggestion_decision`].
    pub fn submit_report_audit(&mut self, decision: AuditDecision) {
        let Some(report) = self.reports.selected_report() else {
            return;
        };
        if !report.audit_status.is_pending() {
            return;
        }
        if self.reports.audit_in_flight.is_some() {
            return;
        }
        let id = report.id;
        self.reports.audit_in_flight = Some(id);
        let request = AuditRequest {
            status: decision,
            remark: None,
        };
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.audit_report(id, request).await;
            let _ = tx.send(AppEvent::ReportAudited {
                id,
                decision,
                result,
            });
        });
    }

    fn export_reports(&mut self) {
        let params = self.reports.list_params();
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match service.export_reports(params).await {
                Ok(bytes) => {
                    let path =
                        PathBuf::from(format!("crypto_reports_{}.xlsx", chrono::Utc::now().timestamp_millis()));
                    match std::fs::write(&path, bytes) {
                        Ok(()) => Ok(path),
                        Err(e) => Err(e.to_string()),
                    }
                }
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(AppEvent::ExportFinished(result));
        });
    }

    fn fetch_from_dify(&mut self) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.fetch_from_dify().await;
            let _ = tx.send(AppEvent::DifyFetched(result));
        });
    }

    // ------------------------------------------------------------------
    // Event application
    // ------------------------------------------------------------------

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Overview { seq, result } => {
                if let SlotOutcome::Failed(msg) = self.dashboard.overview.finish(seq, result) {
                    self.error(format!("portfolio load failed: {}", msg));
                }
            }
            AppEvent::History { seq, result } => {
                if let SlotOutcome::Failed(msg) = self.dashboard.history.finish(seq, result) {
                    self.error(format!("history load failed: {}", msg));
                }
            }
            AppEvent::Suggestion { seq, result } => {
                if let SlotOutcome::Failed(msg) = self.dashboard.suggestion.finish(seq, result) {
                    self.error(format!("suggestion load failed: {}", msg));
                }
            }
            AppEvent::NewsPreview { seq, result } => {
                if let SlotOutcome::Failed(msg) = self.dashboard.news.finish(seq, result) {
                    self.error(format!("news load failed: {}", msg));
                }
            }
            AppEvent::Holdings { seq, result } => {
                match self.holdings.holdings.finish(seq, result) {
                    SlotOutcome::Updated => self.holdings.clamp_selection(),
                    SlotOutcome::Failed(msg) => {
                        self.error(format!("holdings load failed: {}", msg))
                    }
                    SlotOutcome::Stale => {}
                }
            }
            AppEvent::Reports { seq, result } => match self.reports.page.finish(seq, result) {
                SlotOutcome::Updated => self.reports.clamp_selection(),
                SlotOutcome::Failed(msg) => self.error(format!("reports load failed: {}", msg)),
                SlotOutcome::Stale => {}
            },
            AppEvent::NewsList { seq, result } => match self.news.items.finish(seq, result) {
                SlotOutcome::Updated => self.news.clamp_selection(),
                SlotOutcome::Failed(msg) => self.error(format!("news load failed: {}", msg)),
                SlotOutcome::Stale => {}
            },
            AppEvent::SuggestionDecided { id, status, result } => {
                self.apply_suggestion_decision(id, status, result)
            }
            AppEvent::ReportAudited {
                id,
                decision,
                result,
            } => self.apply_report_audit(id, decision, result),
            AppEvent::MarketRefreshed(result) => match result {
                Ok(()) => {
                    self.success("market data refresh triggered");
                    self.load_dashboard();
                }
                Err(e) => self.error(format!("market refresh failed: {}", e)),
            },
            AppEvent::ExportFinished(result) => match result {
                Ok(path) => self.success(format!("reports exported to {}", path.display())),
                Err(e) => self.error(format!("report export failed: {}", e)),
            },
            AppEvent::DifyFetched(result) => match result {
                Ok(()) => {
                    self.success("fetched messages from Dify");
                    self.load_news();
                }
                Err(e) => self.error(format!("Dify fetch failed: {}", e)),
            },
        }
    }

    /// Apply the round-trip outcome of a suggestion decision.
    ///
    /// The local copy is patched only after the backend confirmed the
    /// decision; the stamped reviewer/time are display placeholders until the
    /// next fetch returns the server's own audit fields. On failure the
    /// suggestion stays pending and actionable.
    fn apply_suggestion_decision(
        &mut self,
        id: String,
        status: ApprovalStatus,
        result: Result<(), ApiError>,
    ) {
        if self.dashboard.decision_in_flight.as_deref() == Some(id.as_str()) {
            self.dashboard.decision_in_flight = None;
        }
        match result {
            Ok(()) => {
                let reviewer = self.reviewer.clone();
                if let Some(suggestion) = self.dashboard.suggestion.data_mut() {
                    if suggestion.id == id {
                        suggestion.status = status;
                        suggestion.approval_time = Some(chrono::Utc::now().to_rfc3339());
                        suggestion.approved_by = Some(reviewer);
                    }
                }
                self.dashboard.show_suggestion_detail = false;
                let verb = match status {
                    ApprovalStatus::Approved => "approved",
                    _ => "rejected",
                };
                self.success(format!("suggestion {}", verb));
            }
            Err(e) => self.error(format!("decision failed, suggestion still pending: {}", e)),
        }
    }

    fn apply_report_audit(
        &mut self,
        id: i64,
        decision: AuditDecision,
        result: Result<(), ApiError>,
    ) {
        if self.reports.audit_in_flight == Some(id) {
            self.reports.audit_in_flight = None;
        }
        match result {
            Ok(()) => {
                let reviewer = self.reviewer.clone();
                if let Some(page) = self.reports.page.data_mut() {
                    if let Some(report) = page.rows.iter_mut().find(|r| r.id == id) {
                        report.audit_status = decision.resulting_status();
                        report.audit_by = Some(reviewer);
                        report.audit_time = Some(chrono::Utc::now().to_rfc3339());
                    }
                }
                self.reports.audit_open = false;
                let verb = match decision {
                    AuditDecision::Approve => "approved",
                    AuditDecision::Reject => "rejected",
                };
                self.success(format!("report {} {}", id, verb));
            }
            Err(e) => self.error(format!("audit failed, report still pending: {}", e)),
        }
    }

    // ------------------------------------------------------------------
    // Keyboard actions
    // ------------------------------------------------------------------

    pub fn handle_action(&mut self, action: KeyboardAction) {
        // Modal-scoped actions take precedence over view navigation.
        if self.dashboard.show_suggestion_detail && self.active_view == ActiveView::Dashboard {
            match action {
                KeyboardAction::CloseModal => {
                    self.dashboard.show_suggestion_detail = false;
                    return;
                }
                KeyboardAction::Approve => {
                    self.submit_suggestion_decision(ApprovalStatus::Approved);
                    return;
                }
                KeyboardAction::Reject => {
                    self.submit_suggestion_decision(ApprovalStatus::Rejected);
                    return;
                }
                KeyboardAction::Quit => {}
                _ => return,
            }
        }
        if self.active_view == ActiveView::Reports && (self.reports.audit_open || self.reports.detail_open) {
            match action {
                KeyboardAction::CloseModal => {
                    self.reports.audit_open = false;
                    self.reports.detail_open = false;
                    return;
                }
                KeyboardAction::Approve if self.reports.audit_open => {
                    self.submit_report_audit(AuditDecision::Approve);
                    return;
                }
                KeyboardAction::Reject if self.reports.audit_open => {
                    self.submit_report_audit(AuditDecision::Reject);
                    return;
                }
                KeyboardAction::Quit => {}
                _ => return,
            }
        }

        match action {
            KeyboardAction::Quit => self.should_quit = true,
            KeyboardAction::GotoDashboard => self.switch_view(ActiveView::Dashboard),
            KeyboardAction::GotoHoldings => self.switch_view(ActiveView::Holdings),
            KeyboardAction::GotoReports => self.switch_view(ActiveView::Reports),
            KeyboardAction::GotoNews => self.switch_view(ActiveView::News),
            KeyboardAction::NextView => self.cycle_view(1),
            KeyboardAction::PrevView => self.cycle_view(-1),
            KeyboardAction::Refresh => self.load_active_view(),
            KeyboardAction::RefreshMarket => self.refresh_market_data(),
            KeyboardAction::Up => self.move_selection(-1),
            KeyboardAction::Down => self.move_selection(1),
            KeyboardAction::OpenDetail => self.open_detail(),
            KeyboardAction::OpenAudit => {
                if self.active_view == ActiveView::Reports {
                    // The audit surface is concealed for decided reports.
                    if self
                        .reports
                        .selected_report()
                        .map(|r| r.audit_status.is_pending())
                        .unwrap_or(false)
                    {
                        self.reports.audit_open = true;
                    }
                }
            }
            KeyboardAction::Export => {
                if self.active_view == ActiveView::Reports {
                    self.export_reports();
                }
            }
            KeyboardAction::ToggleFavorite => {
                if self.active_view == ActiveView::News {
                    if let Some(notice) = self.news.toggle_selected_favorite() {
                        self.success(notice);
                    }
                }
            }
            KeyboardAction::CycleSentiment => {
                if self.active_view == ActiveView::News {
                    self.news.cycle_sentiment_filter();
                    self.load_news();
                }
            }
            KeyboardAction::FetchFromDify => {
                if self.active_view == ActiveView::News {
                    self.fetch_from_dify();
                }
            }
            KeyboardAction::CloseModal | KeyboardAction::Approve | KeyboardAction::Reject => {}
        }
    }

    fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.load_active_view();
    }

    fn cycle_view(&mut self, step: i32) {
        let views = ActiveView::all();
        let current = views
            .iter()
            .position(|v| *v == self.active_view)
            .unwrap_or(0) as i32;
        let next = (current + step).rem_euclid(views.len() as i32) as usize;
        self.switch_view(views[next]);
    }

    fn move_selection(&mut self, step: i32) {
        match self.active_view {
            ActiveView::Holdings => self.holdings.move_selection(step),
            ActiveView::Reports => self.reports.move_selection(step),
            ActiveView::News => self.news.move_selection(step),
            ActiveView::Dashboard => {}
        }
    }

    fn open_detail(&mut self) {
        match self.active_view {
            ActiveView::Dashboard => {
                if self.dashboard.suggestion.data().is_some() {
                    self.dashboard.show_suggestion_detail = true;
                }
            }
            ActiveView::Reports => {
                if self.reports.selected_report().is_some() {
                    self.reports.detail_open = true;
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// TOP-LEVEL RENDERING
// ============================================================================

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tabs(f, chunks[0], app);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(f, chunks[1], &app.dashboard, &app.theme),
        ActiveView::Holdings => holdings::render(f, chunks[1], &mut app.holdings, &app.theme),
        ActiveView::Reports => reports::render(f, chunks[1], &mut app.reports, &app.theme),
        ActiveView::News => news::render(f, chunks[1], &mut app.news, &app.theme),
    }

    render_status_line(f, chunks[2], app);
}

fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let titles: Vec<Line> = ActiveView::all()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if *view == app.active_view {
                app.theme.title_style()
            } else {
                Style::default().fg(app.theme.text)
            };
            Line::from(Span::styled(format!("[{}] {}", i + 1, view.title()), style))
        })
        .collect();
    let selected = ActiveView::all()
        .iter()
        .position(|v| *v == app.active_view)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("coinlens — crypto investment assistant"),
        )
        .select(selected);
    f.render_widget(tabs, area);
}

fn render_status_line(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => {
            let style = match notice.kind {
                NoticeKind::Success => Style::default().fg(app.theme.positive),
                NoticeKind::Error => Style::default().fg(app.theme.negative),
            };
            Line::from(Span::styled(notice.text.clone(), style))
        }
        None => Line::from(Span::styled(
            "q quit · 1-4 views · r refresh · m market refresh · enter detail",
            Style::default()
                .fg(app.theme.text_muted)
                .add_modifier(Modifier::DIM),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
