//! Unit tests for the dashboard view and formatting helpers
//!
//! Tests cover:
//! - Currency and percentage formatting
//! - Semantic styling for signed values
//! - Dashboard slot behavior under partial failures
//! - Full-frame render smoke test

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use tokio::runtime::Handle;

use crate::api::ApiError;
use crate::app::{self, App};
use crate::components::tables::{format_signed_pct, format_usd};
use crate::dashboard::DashboardState;
use crate::fixtures::FixtureService;
use crate::theme::Theme;

// ============================================================================
// FORMATTING TESTS
// ============================================================================

#[test]
fn test_format_usd_groups_thousands() {
    assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_usd(1_234.5), "$1,234.50");
    assert_eq!(format_usd(999.0), "$999.00");
    assert_eq!(format_usd(0.0), "$0.00");
}

#[test]
fn test_format_usd_negative_sign_before_symbol() {
    assert_eq!(format_usd(-25_000.0), "-$25,000.00");
    assert_eq!(format_usd(-0.5), "-$0.50");
}

#[test]
fn test_format_usd_rounds_cents() {
    assert_eq!(format_usd(41_999.999), "$42,000.00");
}

#[test]
fn test_format_signed_pct() {
    assert_eq!(format_signed_pct(3.2), "+3.20%");
    assert_eq!(format_signed_pct(-2.5), "-2.50%");
    assert_eq!(format_signed_pct(0.0), "+0.00%");
}

// ============================================================================
// SEMANTIC STYLING TESTS
// ============================================================================

#[test]
fn test_change_style_colors_by_sign() {
    let theme = Theme::dark();
    assert_eq!(theme.change_style(1.0).fg, Some(Color::Green));
    assert_eq!(theme.change_style(0.0).fg, Some(Color::Green));
    assert_eq!(theme.change_style(-1.0).fg, Some(Color::Red));
}

// ============================================================================
// DASHBOARD SLOT TESTS
// ============================================================================

#[test]
fn test_failed_news_refresh_keeps_preview() {
    let mut state = DashboardState::new();
    let seq = state.news.begin().unwrap();
    state.news.finish(seq, Ok(Vec::new()));

    let seq = state.news.begin().unwrap();
    state
        .news
        .finish(seq, Err(ApiError::Network("timeout".to_string())));

    // The widget keeps rendering the last snapshot instead of an error.
    assert!(state.news.state().is_loaded());
    assert!(!state.news.is_busy());
}

#[test]
fn test_dashboard_slots_load_independently() {
    let mut state = DashboardState::new();
    let seq = state.overview.begin().unwrap();
    state.overview.finish(
        seq,
        Err(ApiError::Server {
            code: 500,
            msg: "internal error".to_string(),
        }),
    );
    let seq = state.history.begin().unwrap();
    state.history.finish(seq, Ok(Vec::new()));

    // One widget failing never blanks its siblings.
    assert!(state.overview.state().is_error());
    assert!(state.history.state().is_loaded());
}

// ============================================================================
// RENDER SMOKE TESTS
// ============================================================================

#[test]
fn test_loaded_overview_renders_formatted_tiles() {
    let mut state = DashboardState::new();
    let seq = state.overview.begin().unwrap();
    state.overview.finish(
        seq,
        Ok(crate::api::PortfolioOverview {
            total_value: 1_000_000.0,
            total_change24h: -25_000.0,
            total_change_percentage24h: -2.5,
            asset_allocation: Vec::new(),
            last_updated: "2023-09-15T10:30:00Z".to_string(),
        }),
    );
    let theme = Theme::dark();

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| crate::dashboard::render(f, f.area(), &state, &theme))
        .unwrap();

    let rendered = format!("{:?}", terminal.backend().buffer());
    assert!(rendered.contains("$1,000,000.00"));
    assert!(rendered.contains("-$25,000.00"));
    assert!(rendered.contains("-2.50%"));
}

#[tokio::test]
async fn test_full_frame_renders_without_data() {
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(
        Arc::new(FixtureService::new()),
        Handle::current(),
        tx,
        "operator".to_string(),
    );

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app::render(f, &mut app)).unwrap();

    let rendered = format!("{:?}", terminal.backend().buffer());
    assert!(rendered.contains("Dashboard"));
    assert!(rendered.contains("coinlens"));
}
