//! API client for communicating with the crypto investment assistant backend
//!
//! Provides async methods for fetching the portfolio overview, market news,
//! rebalancing suggestions, analysis reports and holdings, and for submitting
//! review decisions. Every method issues exactly one HTTP request and returns
//! the parsed envelope; there is no retry, caching or client-side validation.

#![allow(dead_code)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error types
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("server error {code}: {msg}")]
    Server { code: i32, msg: String },
}

// ============================================================================
// RESPONSE ENVELOPES
// ============================================================================

/// Single-object envelope: `{code, msg, data}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, mapping a non-200 code to `ApiError::Server`
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.code != 200 {
            return Err(ApiError::Server {
                code: self.code,
                msg: self.msg,
            });
        }
        self.data
            .ok_or_else(|| ApiError::Parse("envelope missing data".to_string()))
    }

    /// Like `into_data`, but a 200 with no payload is a valid empty result
    pub fn into_optional(self) -> Result<Option<T>, ApiError> {
        if self.code != 200 {
            return Err(ApiError::Server {
                code: self.code,
                msg: self.msg,
            });
        }
        Ok(self.data)
    }
}

/// Paged envelope: `{code, msg, rows, total}`
#[derive(Debug, Deserialize)]
pub struct PageEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> PageEnvelope<T> {
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        if self.code != 200 {
            return Err(ApiError::Server {
                code: self.code,
                msg: self.msg,
            });
        }
        Ok(Page {
            rows: self.rows,
            total: self.total,
        })
    }
}

/// List envelope used by the portfolio news feed: `{code, msg, data, total}`
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<Vec<T>>,
    pub total: Option<u64>,
}

impl<T> ListEnvelope<T> {
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        if self.code != 200 {
            return Err(ApiError::Server {
                code: self.code,
                msg: self.msg,
            });
        }
        let rows = self.data.unwrap_or_default();
        let total = self.total.unwrap_or(rows.len() as u64);
        Ok(Page { rows, total })
    }
}

/// One page of a list result
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: u64,
}

// ============================================================================
// DOMAIN ENUMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Review state shared by suggestions and analysis reports.
/// The only transitions the backend performs are `pending -> approved`
/// and `pending -> rejected`; both targets are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

/// Decision verb sent to the report audit endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditDecision {
    Approve,
    Reject,
}

impl AuditDecision {
    /// The terminal status this decision moves the entity into
    pub fn resulting_status(&self) -> ApprovalStatus {
        match self {
            AuditDecision::Approve => ApprovalStatus::Approved,
            AuditDecision::Reject => ApprovalStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub total_value: f64,
    pub total_change24h: f64,
    pub total_change_percentage24h: f64,
    pub asset_allocation: Vec<CryptoAsset>,
    pub last_updated: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub price: f64,
    pub total_value: f64,
    pub percentage: f64,
    pub change24h: f64,
}

/// Canonical market news item. The backend exposes two incompatible news
/// shapes; both adapt into this one (see `PortfolioNewsItem` and
/// `AnalysisNewsItem`), so no other module deals with the variants.
#[derive(Debug, Clone)]
pub struct MarketNews {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_at: String,
    pub sentiment: Sentiment,
    pub related_coins: Vec<String>,
    pub impact: Option<ImpactLevel>,
}

/// News as served by `/crypto-investment/news`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioNewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub publish_time: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub related_coins: Vec<String>,
}

impl From<PortfolioNewsItem> for MarketNews {
    fn from(item: PortfolioNewsItem) -> Self {
        MarketNews {
            id: item.id,
            title: item.title,
            content: item.content,
            source: item.source,
            published_at: item.publish_time,
            sentiment: item.sentiment,
            related_coins: item.related_coins,
            impact: None,
        }
    }
}

/// News as served by `/crypto/news` (one currency per item)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisNewsItem {
    pub id: i64,
    pub currency_type: String,
    pub news_date: String,
    pub title: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub source: String,
    pub impact_level: Option<ImpactLevel>,
}

impl From<AnalysisNewsItem> for MarketNews {
    fn from(item: AnalysisNewsItem) -> Self {
        MarketNews {
            id: item.id.to_string(),
            title: item.title,
            content: item.content,
            source: item.source,
            published_at: item.news_date,
            sentiment: item.sentiment,
            related_coins: vec![item.currency_type],
            impact: item.impact_level,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdjustment {
    pub symbol: String,
    pub current_percentage: f64,
    pub suggested_percentage: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSuggestion {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub assets_to_increase: Vec<AssetAdjustment>,
    #[serde(default)]
    pub assets_to_decrease: Vec<AssetAdjustment>,
    pub summary: String,
    pub status: ApprovalStatus,
    pub approval_time: Option<String>,
    pub approved_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: i64,
    pub report_date: String,
    pub current_total_value: f64,
    pub daily_change: f64,
    pub suggested_adjustments: String,
    pub market_summary: String,
    pub risk_level: RiskLevel,
    pub audit_status: ApprovalStatus,
    pub audit_by: Option<String>,
    pub audit_time: Option<String>,
    pub audit_remark: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub id: i64,
    pub currency_type: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub market_value: f64,
    pub profit_loss: f64,
    pub profit_loss_rate: f64,
    pub allocation_percentage: f64,
    pub last_updated: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValue {
    pub symbol: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    pub date: String,
    pub total_value: f64,
    #[serde(default)]
    pub assets: Vec<AssetValue>,
}

/// Row from the market message admin surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: Option<String>,
    pub emotion: Option<String>,
    pub publish_time: Option<String>,
    pub content: Option<String>,
}

// ============================================================================
// REQUEST PARAMETERS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub page_size: Option<u32>,
    pub current: Option<u32>,
    pub symbols: Vec<String>,
    pub sentiment: Option<Sentiment>,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub days: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionHistoryQuery {
    pub page_size: Option<u32>,
    pub current: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportListParams {
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub audit_status: Option<ApprovalStatus>,
}

impl ReportListParams {
    fn query_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(n) = self.page_num {
            params.push(format!("pageNum={}", n));
        }
        if let Some(n) = self.page_size {
            params.push(format!("pageSize={}", n));
        }
        if let Some(ref d) = self.start_date {
            params.push(format!("startDate={}", d));
        }
        if let Some(ref d) = self.end_date {
            params.push(format!("endDate={}", d));
        }
        if let Some(risk) = self.risk_level {
            let label = match risk {
                RiskLevel::Low => "low",
                RiskLevel::Medium => "medium",
                RiskLevel::High => "high",
            };
            params.push(format!("riskLevel={}", label));
        }
        if let Some(status) = self.audit_status {
            let label = match status {
                ApprovalStatus::Pending => "pending",
                ApprovalStatus::Approved => "approved",
                ApprovalStatus::Rejected => "rejected",
            };
            params.push(format!("auditStatus={}", label));
        }
        params
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveSuggestionParams {
    pub suggestion_id: String,
    pub status: ApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditRequest {
    pub status: AuditDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageListQuery {
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
    pub name: Option<String>,
}

// ============================================================================
// SERVICE INTERFACE
// ============================================================================

/// The service surface the views talk to. Served either by the live
/// `ApiClient` or by the in-memory `FixtureService`, so no view ever holds
/// inline mock data.
#[async_trait]
pub trait PortfolioService: Send + Sync {
    async fn portfolio_overview(&self) -> Result<PortfolioOverview, ApiError>;
    async fn market_news(&self, query: NewsQuery) -> Result<Page<MarketNews>, ApiError>;
    async fn latest_suggestion(&self) -> Result<InvestmentSuggestion, ApiError>;
    async fn suggestion_history(
        &self,
        query: SuggestionHistoryQuery,
    ) -> Result<Vec<InvestmentSuggestion>, ApiError>;
    async fn approve_suggestion(&self, params: ApproveSuggestionParams) -> Result<(), ApiError>;
    async fn historical_data(&self, query: HistoryQuery) -> Result<Vec<HistoricalPoint>, ApiError>;
    async fn refresh_market_data(&self) -> Result<(), ApiError>;

    async fn list_reports(&self, params: ReportListParams)
        -> Result<Page<AnalysisReport>, ApiError>;
    async fn latest_report(&self) -> Result<Option<AnalysisReport>, ApiError>;
    async fn report_detail(&self, id: i64) -> Result<AnalysisReport, ApiError>;
    async fn audit_report(&self, id: i64, request: AuditRequest) -> Result<(), ApiError>;
    async fn export_reports(&self, params: ReportListParams) -> Result<Vec<u8>, ApiError>;

    async fn current_holdings(&self) -> Result<Vec<CryptoHolding>, ApiError>;
    async fn currency_news(
        &self,
        currency_type: Option<String>,
    ) -> Result<Vec<MarketNews>, ApiError>;

    async fn list_messages(&self, query: MessageListQuery)
        -> Result<Page<MarketMessage>, ApiError>;
    async fn save_message(&self, message: MarketMessage) -> Result<(), ApiError>;
    async fn update_message(&self, message: MarketMessage) -> Result<(), ApiError>;
    async fn delete_messages(&self, ids: &[i64]) -> Result<(), ApiError>;
    async fn fetch_from_dify(&self) -> Result<(), ApiError>;
}

// ============================================================================
// HTTP CLIENT
// ============================================================================

/// Live HTTP implementation of [`PortfolioService`]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn url(&self, path: &str, params: Vec<String>) -> String {
        if params.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, params.join("&"))
        }
    }
}

#[async_trait]
impl PortfolioService for ApiClient {
    async fn portfolio_overview(&self) -> Result<PortfolioOverview, ApiError> {
        let url = self.url("/api/crypto-investment/portfolio", Vec::new());
        let envelope: Envelope<PortfolioOverview> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn market_news(&self, query: NewsQuery) -> Result<Page<MarketNews>, ApiError> {
        let mut params = Vec::new();
        if let Some(n) = query.page_size {
            params.push(format!("pageSize={}", n));
        }
        if let Some(n) = query.current {
            params.push(format!("current={}", n));
        }
        for symbol in &query.symbols {
            params.push(format!("symbols={}", symbol));
        }
        if let Some(sentiment) = query.sentiment {
            params.push(format!("sentiment={}", sentiment.as_str()));
        }
        let url = self.url("/api/crypto-investment/news", params);
        let envelope: ListEnvelope<PortfolioNewsItem> = self.get_json(url).await?;
        let page = envelope.into_page()?;
        Ok(Page {
            rows: page.rows.into_iter().map(MarketNews::from).collect(),
            total: page.total,
        })
    }

    async fn latest_suggestion(&self) -> Result<InvestmentSuggestion, ApiError> {
        let url = self.url("/api/crypto-investment/suggestion/latest", Vec::new());
        let envelope: Envelope<InvestmentSuggestion> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn suggestion_history(
        &self,
        query: SuggestionHistoryQuery,
    ) -> Result<Vec<InvestmentSuggestion>, ApiError> {
        let mut params = Vec::new();
        if let Some(n) = query.page_size {
            params.push(format!("pageSize={}", n));
        }
        if let Some(n) = query.current {
            params.push(format!("current={}", n));
        }
        if let Some(ref d) = query.start_date {
            params.push(format!("startDate={}", d));
        }
        if let Some(ref d) = query.end_date {
            params.push(format!("endDate={}", d));
        }
        let url = self.url("/api/crypto-investment/suggestion/history", params);
        let envelope: Envelope<Vec<InvestmentSuggestion>> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn approve_suggestion(&self, params: ApproveSuggestionParams) -> Result<(), ApiError> {
        let url = self.url("/api/crypto-investment/suggestion/approve", Vec::new());
        let envelope: Envelope<serde_json::Value> = self.post_json(url, &params).await?;
        envelope.into_optional().map(|_| ())
    }

    async fn historical_data(&self, query: HistoryQuery) -> Result<Vec<HistoricalPoint>, ApiError> {
        let mut params = Vec::new();
        if let Some(days) = query.days {
            params.push(format!("days={}", days));
        }
        if let Some(ref d) = query.start_date {
            params.push(format!("startDate={}", d));
        }
        if let Some(ref d) = query.end_date {
            params.push(format!("endDate={}", d));
        }
        let url = self.url("/api/crypto-investment/history", params);
        let envelope: Envelope<Vec<HistoricalPoint>> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn refresh_market_data(&self) -> Result<(), ApiError> {
        let url = self.url("/api/crypto-investment/market/refresh", Vec::new());
        let envelope: Envelope<serde_json::Value> =
            self.post_json(url, &serde_json::json!({})).await?;
        envelope.into_optional().map(|_| ())
    }

    async fn list_reports(
        &self,
        params: ReportListParams,
    ) -> Result<Page<AnalysisReport>, ApiError> {
        let url = self.url("/api/crypto/analysis/list", params.query_params());
        let envelope: PageEnvelope<AnalysisReport> = self.get_json(url).await?;
        envelope.into_page()
    }

    async fn latest_report(&self) -> Result<Option<AnalysisReport>, ApiError> {
        let url = self.url("/api/crypto/analysis/latest", Vec::new());
        let envelope: Envelope<AnalysisReport> = self.get_json(url).await?;
        envelope.into_optional()
    }

    async fn report_detail(&self, id: i64) -> Result<AnalysisReport, ApiError> {
        let url = self.url(&format!("/api/crypto/analysis/{}", id), Vec::new());
        let envelope: Envelope<AnalysisReport> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn audit_report(&self, id: i64, request: AuditRequest) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/crypto/analysis/audit/{}", id), Vec::new());
        let envelope: Envelope<serde_json::Value> = self.post_json(url, &request).await?;
        envelope.into_optional().map(|_| ())
    }

    async fn export_reports(&self, params: ReportListParams) -> Result<Vec<u8>, ApiError> {
        let url = self.url("/api/crypto/analysis/export", params.query_params());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ApiError::Server {
                code: response.status().as_u16() as i32,
                msg: "export failed".to_string(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn current_holdings(&self) -> Result<Vec<CryptoHolding>, ApiError> {
        let url = self.url("/api/crypto/holdings", Vec::new());
        let envelope: Envelope<Vec<CryptoHolding>> = self.get_json(url).await?;
        envelope.into_data()
    }

    async fn currency_news(
        &self,
        currency_type: Option<String>,
    ) -> Result<Vec<MarketNews>, ApiError> {
        let mut params = Vec::new();
        if let Some(currency) = currency_type {
            params.push(format!("currencyType={}", currency));
        }
        let url = self.url("/api/crypto/news", params);
        let envelope: Envelope<Vec<AnalysisNewsItem>> = self.get_json(url).await?;
        let items = envelope.into_data()?;
        Ok(items.into_iter().map(MarketNews::from).collect())
    }

    async fn list_messages(
        &self,
        query: MessageListQuery,
    ) -> Result<Page<MarketMessage>, ApiError> {
        let mut params = Vec::new();
        if let Some(n) = query.page_num {
            params.push(format!("pageNum={}", n));
        }
        if let Some(n) = query.page_size {
            params.push(format!("pageSize={}", n));
        }
        if let Some(ref name) = query.name {
            params.push(format!("name={}", name));
        }
        let url = self.url("/api/currency/market/message-list", params);
        let envelope: PageEnvelope<MarketMessage> = self.get_json(url).await?;
        envelope.into_page()
    }

    async fn save_message(&self, message: MarketMessage) -> Result<(), ApiError> {
        let url = self.url("/api/currency/market/message-list", Vec::new());
        let envelope: Envelope<serde_json::Value> = self.post_json(url, &message).await?;
        envelope.into_optional().map(|_| ())
    }

    async fn update_message(&self, message: MarketMessage) -> Result<(), ApiError> {
        let url = self.url("/api/currency/market/message-list", Vec::new());
        let response = self
            .http
            .put(&url)
            .json(&message)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        envelope.into_optional().map(|_| ())
    }

    async fn delete_messages(&self, ids: &[i64]) -> Result<(), ApiError> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.url(
            &format!("/api/currency/market/message-list/{}", joined),
            Vec::new(),
        );
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        envelope.into_optional().map(|_| ())
    }

    async fn fetch_from_dify(&self) -> Result<(), ApiError> {
        let url = self.url(
            "/api/currency/market/message-list/fetch-from-dify",
            Vec::new(),
        );
        let envelope: Envelope<serde_json::Value> =
            self.post_json(url, &serde_json::json!({})).await?;
        envelope.into_optional().map(|_| ())
    }
}
