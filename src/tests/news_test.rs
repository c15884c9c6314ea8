//! Unit tests for the news view
//!
//! Tests cover:
//! - Adapting both backend news shapes into the canonical item
//! - Session-local favorites
//! - Sentiment filter cycling
//! - Content truncation

use crate::api::{
    AnalysisNewsItem, ApiError, ImpactLevel, MarketNews, Page, PortfolioNewsItem, Sentiment,
};
use crate::news::{truncate_content, FavoriteSet, NewsState};

fn item(id: &str, sentiment: Sentiment) -> MarketNews {
    MarketNews {
        id: id.to_string(),
        title: format!("news {}", id),
        content: "content".to_string(),
        source: "Feed".to_string(),
        published_at: "2023-09-15T08:30:00Z".to_string(),
        sentiment,
        related_coins: vec!["BTC".to_string()],
        impact: None,
    }
}

fn loaded_state(items: Vec<MarketNews>) -> NewsState {
    let mut state = NewsState::new();
    let seq = state.items.begin().unwrap();
    let total = items.len() as u64;
    state.items.finish(seq, Ok(Page { rows: items, total }));
    state
}

// ============================================================================
// ADAPTER TESTS
// ============================================================================

#[test]
fn test_portfolio_news_item_adapts() {
    let wire = PortfolioNewsItem {
        id: "1".to_string(),
        title: "比特币ETF获批".to_string(),
        content: "市场预期积极".to_string(),
        source: "Crypto News".to_string(),
        publish_time: "2023-09-15T08:30:00Z".to_string(),
        sentiment: Sentiment::Positive,
        related_coins: vec!["BTC".to_string()],
    };
    let news = MarketNews::from(wire);
    assert_eq!(news.id, "1");
    assert_eq!(news.published_at, "2023-09-15T08:30:00Z");
    assert_eq!(news.related_coins, vec!["BTC".to_string()]);
    assert!(news.impact.is_none());
}

#[test]
fn test_analysis_news_item_adapts() {
    let wire = AnalysisNewsItem {
        id: 9,
        currency_type: "ETH".to_string(),
        news_date: "2023-09-15".to_string(),
        title: "以太坊升级".to_string(),
        content: "网络升级启动".to_string(),
        sentiment: Sentiment::Neutral,
        source: "ETH Daily".to_string(),
        impact_level: Some(ImpactLevel::Medium),
    };
    let news = MarketNews::from(wire);
    assert_eq!(news.id, "9");
    assert_eq!(news.published_at, "2023-09-15");
    assert_eq!(news.related_coins, vec!["ETH".to_string()]);
    assert!(matches!(news.impact, Some(ImpactLevel::Medium)));
}

// ============================================================================
// FAVORITES TESTS
// ============================================================================

#[test]
fn test_favorite_toggle_is_an_involution() {
    let mut favorites = FavoriteSet::new();
    assert!(favorites.toggle("1"));
    assert!(favorites.contains("1"));
    assert!(!favorites.toggle("1"));
    assert!(!favorites.contains("1"));
    assert!(favorites.is_empty());
}

#[test]
fn test_toggle_selected_favorite_reports_outcome() {
    let mut state = loaded_state(vec![
        item("1", Sentiment::Positive),
        item("2", Sentiment::Negative),
    ]);
    state.selected = 1;

    assert_eq!(state.toggle_selected_favorite().as_deref(), Some("收藏成功"));
    assert!(state.favorites.contains("2"));
    assert_eq!(
        state.toggle_selected_favorite().as_deref(),
        Some("取消收藏成功")
    );
    assert!(!state.favorites.contains("2"));
}

#[test]
fn test_toggle_favorite_without_items_is_noop() {
    let mut state = NewsState::new();
    assert!(state.toggle_selected_favorite().is_none());
}

#[test]
fn test_favorites_survive_a_reload() {
    let mut state = loaded_state(vec![item("1", Sentiment::Positive)]);
    state.toggle_selected_favorite();

    let seq = state.items.begin().unwrap();
    state.items.finish(
        seq,
        Ok(Page {
            rows: vec![item("1", Sentiment::Positive), item("2", Sentiment::Neutral)],
            total: 2,
        }),
    );
    assert!(state.favorites.contains("1"));
}

// ============================================================================
// SENTIMENT FILTER TESTS
// ============================================================================

#[test]
fn test_sentiment_filter_cycles_through_all_states() {
    let mut state = NewsState::new();
    assert!(state.sentiment_filter.is_none());

    state.cycle_sentiment_filter();
    assert_eq!(state.sentiment_filter, Some(Sentiment::Positive));
    state.cycle_sentiment_filter();
    assert_eq!(state.sentiment_filter, Some(Sentiment::Negative));
    state.cycle_sentiment_filter();
    assert_eq!(state.sentiment_filter, Some(Sentiment::Neutral));
    state.cycle_sentiment_filter();
    assert!(state.sentiment_filter.is_none());
}

// ============================================================================
// SELECTION TESTS
// ============================================================================

#[test]
fn test_selection_wraps_around() {
    let mut state = loaded_state(vec![
        item("1", Sentiment::Positive),
        item("2", Sentiment::Negative),
        item("3", Sentiment::Neutral),
    ]);
    state.move_selection(-1);
    assert_eq!(state.selected, 2);
    state.move_selection(1);
    assert_eq!(state.selected, 0);
}

#[test]
fn test_selection_clamps_after_shorter_reload() {
    let mut state = loaded_state(vec![
        item("1", Sentiment::Positive),
        item("2", Sentiment::Negative),
        item("3", Sentiment::Neutral),
    ]);
    state.selected = 2;

    let seq = state.items.begin().unwrap();
    state.items.finish(
        seq,
        Ok(Page {
            rows: vec![item("1", Sentiment::Positive)],
            total: 1,
        }),
    );
    state.clamp_selection();
    assert_eq!(state.selected, 0);
}

#[test]
fn test_failed_reload_keeps_items_visible() {
    let mut state = loaded_state(vec![item("1", Sentiment::Positive)]);
    let seq = state.items.begin().unwrap();
    state
        .items
        .finish(seq, Err(ApiError::Network("timeout".to_string())));
    assert_eq!(state.items.data().map(|p| p.rows.len()), Some(1));
}

// ============================================================================
// EMPTY STATE TESTS
// ============================================================================

#[test]
fn test_empty_feed_renders_declared_empty_state() {
    let mut state = loaded_state(Vec::new());
    let theme = crate::theme::Theme::dark();

    let backend = ratatui::backend::TestBackend::new(100, 30);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal
        .draw(|f| crate::news::render(f, f.area(), &mut state, &theme))
        .unwrap();

    let rendered = format!("{:?}", terminal.backend().buffer());
    assert!(rendered.contains("暂无市场消息"));
}

// ============================================================================
// TRUNCATION TESTS
// ============================================================================

#[test]
fn test_truncate_content_short_string_unchanged() {
    assert_eq!(truncate_content("short", 80), "short");
}

#[test]
fn test_truncate_content_appends_ellipsis() {
    let long = "a".repeat(100);
    let truncated = truncate_content(&long, 80);
    assert_eq!(truncated.len(), 83);
    assert!(truncated.ends_with("..."));
}

#[test]
fn test_truncate_content_respects_multibyte_boundaries() {
    let chinese = "美国证券交易委员会已将比特币ETF申请推进至最终审查阶段";
    let truncated = truncate_content(chinese, 10);
    assert_eq!(truncated.chars().count(), 13);
    assert!(truncated.ends_with("..."));
}
