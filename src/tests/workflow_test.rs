//! Integration tests for the review workflow
//!
//! Tests cover:
//! - The one-way pending -> approved/rejected transition on fixtures
//! - The full suggestion decision round trip through the app
//! - The report audit round trip through the app
//! - In-flight guards against double submission
//! - Message admin operations on the fixture service

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::{
    ApproveSuggestionParams, ApprovalStatus, AuditDecision, AuditRequest, MarketMessage,
    MessageListQuery, PortfolioService, ReportListParams,
};
use crate::app::{ActiveView, App, AppEvent, NoticeKind};
use crate::fixtures::FixtureService;
use crate::keyboard::KeyboardAction;

fn test_app() -> (App, UnboundedReceiver<AppEvent>) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let app = App::new(
        Arc::new(FixtureService::new()),
        Handle::current(),
        tx,
        "operator".to_string(),
    );
    (app, rx)
}

async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>, count: usize) {
    for _ in 0..count {
        let event = rx.recv().await.expect("event channel closed");
        app.handle_event(event);
    }
}

fn approve_params(id: &str, status: ApprovalStatus) -> ApproveSuggestionParams {
    ApproveSuggestionParams {
        suggestion_id: id.to_string(),
        status,
        comments: None,
    }
}

// ============================================================================
// FIXTURE TRANSITION TESTS
// ============================================================================

#[tokio::test]
async fn test_fixture_suggestion_decision_is_one_way() {
    let service = FixtureService::new();
    let before = service.latest_suggestion().await.unwrap();
    assert!(before.status.is_pending());
    assert!(before.approval_time.is_none());

    service
        .approve_suggestion(approve_params("1", ApprovalStatus::Approved))
        .await
        .unwrap();

    let after = service.latest_suggestion().await.unwrap();
    assert_eq!(after.status, ApprovalStatus::Approved);
    assert!(after.approval_time.is_some());
    assert!(after.approved_by.is_some());

    // A second decision on a decided suggestion is refused.
    let err = service
        .approve_suggestion(approve_params("1", ApprovalStatus::Rejected))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already decided"));

    let unchanged = service.latest_suggestion().await.unwrap();
    assert_eq!(unchanged.status, ApprovalStatus::Approved);
}

#[tokio::test]
async fn test_fixture_unknown_suggestion_is_not_found() {
    let service = FixtureService::new();
    let err = service
        .approve_suggestion(approve_params("999", ApprovalStatus::Approved))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_fixture_report_audit_is_one_way() {
    let service = FixtureService::new();

    service
        .audit_report(
            7,
            AuditRequest {
                status: AuditDecision::Approve,
                remark: Some("符合预期".to_string()),
            },
        )
        .await
        .unwrap();

    let report = service.report_detail(7).await.unwrap();
    assert_eq!(report.audit_status, ApprovalStatus::Approved);
    assert_eq!(report.audit_remark.as_deref(), Some("符合预期"));
    assert!(report.audit_time.is_some());

    // Report 5 was decided long ago; auditing it again is refused.
    let err = service
        .audit_report(
            5,
            AuditRequest {
                status: AuditDecision::Reject,
                remark: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already audited"));

    let err = service
        .audit_report(
            999,
            AuditRequest {
                status: AuditDecision::Approve,
                remark: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_fixture_export_lists_filtered_reports() {
    let service = FixtureService::new();
    let bytes = service
        .export_reports(ReportListParams {
            audit_status: Some(ApprovalStatus::Pending),
            ..Default::default()
        })
        .await
        .unwrap();
    let body = String::from_utf8(bytes).unwrap();
    assert!(body.starts_with("id,reportDate"));
    assert!(body.contains("\n7,2023-09-15"));
    assert!(!body.contains("\n5,"));
}

// ============================================================================
// SUGGESTION DECISION ROUND TRIP
// ============================================================================

#[tokio::test]
async fn test_suggestion_approval_round_trip() {
    let (mut app, mut rx) = test_app();
    app.load_dashboard();
    pump(&mut app, &mut rx, 4).await;

    let suggestion = app.dashboard.suggestion.data().unwrap();
    assert!(suggestion.status.is_pending());

    app.handle_action(KeyboardAction::OpenDetail);
    assert!(app.dashboard.show_suggestion_detail);

    app.handle_action(KeyboardAction::Approve);
    assert_eq!(app.dashboard.decision_in_flight.as_deref(), Some("1"));
    pump(&mut app, &mut rx, 1).await;

    let suggestion = app.dashboard.suggestion.data().unwrap();
    assert_eq!(suggestion.status, ApprovalStatus::Approved);
    assert_eq!(suggestion.approved_by.as_deref(), Some("operator"));
    assert!(suggestion.approval_time.is_some());

    assert!(app.dashboard.decision_in_flight.is_none());
    assert!(!app.dashboard.show_suggestion_detail);
    let notice = app.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_double_keypress_submits_once() {
    let (mut app, mut rx) = test_app();
    app.load_dashboard();
    pump(&mut app, &mut rx, 4).await;

    app.handle_action(KeyboardAction::OpenDetail);
    app.handle_action(KeyboardAction::Reject);
    // Second press while the request is outstanding must be ignored.
    app.handle_action(KeyboardAction::Reject);

    pump(&mut app, &mut rx, 1).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());

    let suggestion = app.dashboard.suggestion.data().unwrap();
    assert_eq!(suggestion.status, ApprovalStatus::Rejected);
}

#[tokio::test]
async fn test_failed_decision_keeps_suggestion_pending() {
    let (mut app, mut rx) = test_app();
    app.load_dashboard();
    pump(&mut app, &mut rx, 4).await;

    // Decide server-side first so the app's next submission is refused.
    app.handle_action(KeyboardAction::OpenDetail);
    app.handle_action(KeyboardAction::Approve);
    pump(&mut app, &mut rx, 1).await;

    // Simulate a stale client that still shows the suggestion as pending.
    app.dashboard.suggestion.data_mut().unwrap().status = ApprovalStatus::Pending;
    app.handle_action(KeyboardAction::OpenDetail);
    app.handle_action(KeyboardAction::Reject);
    pump(&mut app, &mut rx, 1).await;

    // The refused decision surfaces as an error and changes nothing locally.
    let notice = app.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(app.dashboard.decision_in_flight.is_none());
    assert!(app
        .dashboard
        .suggestion
        .data()
        .unwrap()
        .status
        .is_pending());
}

#[tokio::test]
async fn test_decided_suggestion_offers_no_decision() {
    let (mut app, mut rx) = test_app();
    app.load_dashboard();
    pump(&mut app, &mut rx, 4).await;

    app.dashboard.suggestion.data_mut().unwrap().status = ApprovalStatus::Approved;
    app.handle_action(KeyboardAction::OpenDetail);
    app.handle_action(KeyboardAction::Reject);

    // Nothing was submitted.
    assert!(app.dashboard.decision_in_flight.is_none());
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

// ============================================================================
// REPORT AUDIT ROUND TRIP
// ============================================================================

#[tokio::test]
async fn test_report_audit_round_trip() {
    let (mut app, mut rx) = test_app();
    app.handle_action(KeyboardAction::GotoReports);
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(app.active_view, ActiveView::Reports);

    // Fixture order: report 5 (approved), 6 (rejected), 7 (pending).
    app.handle_action(KeyboardAction::Down);
    app.handle_action(KeyboardAction::Down);
    assert_eq!(app.reports.selected_report().unwrap().id, 7);

    app.handle_action(KeyboardAction::OpenAudit);
    assert!(app.reports.audit_open);

    app.handle_action(KeyboardAction::Approve);
    assert_eq!(app.reports.audit_in_flight, Some(7));
    pump(&mut app, &mut rx, 1).await;

    let report = app.reports.selected_report().unwrap();
    assert_eq!(report.audit_status, ApprovalStatus::Approved);
    assert_eq!(report.audit_by.as_deref(), Some("operator"));
    assert!(!app.reports.audit_open);
    assert!(app.reports.audit_in_flight.is_none());
}

#[tokio::test]
async fn test_audit_not_offered_for_decided_report() {
    let (mut app, mut rx) = test_app();
    app.handle_action(KeyboardAction::GotoReports);
    pump(&mut app, &mut rx, 1).await;

    // Report 5 is already approved.
    assert_eq!(app.reports.selected_report().unwrap().id, 5);
    app.handle_action(KeyboardAction::OpenAudit);
    assert!(!app.reports.audit_open);
}

#[tokio::test]
async fn test_detail_modal_swallows_navigation() {
    let (mut app, mut rx) = test_app();
    app.handle_action(KeyboardAction::GotoReports);
    pump(&mut app, &mut rx, 1).await;

    app.handle_action(KeyboardAction::OpenDetail);
    assert!(app.reports.detail_open);

    app.handle_action(KeyboardAction::Down);
    assert_eq!(app.reports.selected, 0);

    app.handle_action(KeyboardAction::CloseModal);
    assert!(!app.reports.detail_open);
}

// ============================================================================
// MESSAGE ADMIN TESTS
// ============================================================================

fn message(name: &str) -> MarketMessage {
    MarketMessage {
        id: None,
        name: name.to_string(),
        price: Some("42000".to_string()),
        emotion: Some("利好".to_string()),
        publish_time: None,
        content: Some("测试消息".to_string()),
    }
}

#[tokio::test]
async fn test_message_crud_on_fixtures() {
    let service = FixtureService::new();
    service.save_message(message("BTC")).await.unwrap();
    service.save_message(message("ETH")).await.unwrap();

    let page = service.list_messages(MessageListQuery::default()).await.unwrap();
    assert_eq!(page.total, 2);
    let first_id = page.rows[0].id.unwrap();

    let mut updated = page.rows[0].clone();
    updated.price = Some("43000".to_string());
    service.update_message(updated).await.unwrap();

    let page = service.list_messages(MessageListQuery::default()).await.unwrap();
    assert_eq!(page.rows[0].price.as_deref(), Some("43000"));

    service.delete_messages(&[first_id]).await.unwrap();
    let page = service.list_messages(MessageListQuery::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].name, "ETH");
}

#[tokio::test]
async fn test_update_without_id_is_refused() {
    let service = FixtureService::new();
    let err = service.update_message(message("BTC")).await.unwrap_err();
    assert!(err.to_string().contains("id required"));
}

#[tokio::test]
async fn test_dify_fetch_appends_message() {
    let (mut app, mut rx) = test_app();
    app.handle_action(KeyboardAction::GotoNews);
    pump(&mut app, &mut rx, 1).await;

    app.handle_action(KeyboardAction::FetchFromDify);
    // DifyFetched triggers a news reload, so two events come back.
    pump(&mut app, &mut rx, 2).await;
    let notice = app.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
}
