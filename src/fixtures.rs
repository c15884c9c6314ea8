//! In-memory fixture implementation of the service interface
//!
//! Serves a deterministic sample portfolio so the dashboard can run without a
//! backend (`COINLENS_FIXTURES=1`) and so tests can exercise the approval
//! workflow end to end. Mutations flip the in-memory copies the same way the
//! backend would, including the one-way `pending -> decided` transition.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    AnalysisReport, ApiError, ApproveSuggestionParams, ApprovalStatus, AssetAdjustment,
    AuditRequest, CryptoAsset, CryptoHolding, HistoricalPoint, HistoryQuery, ImpactLevel,
    InvestmentSuggestion, MarketMessage, MarketNews, MessageListQuery, NewsQuery, Page,
    PortfolioOverview, PortfolioService, ReportListParams, RiskLevel, Sentiment,
    SuggestionHistoryQuery,
};

struct FixtureState {
    overview: PortfolioOverview,
    news: Vec<MarketNews>,
    suggestion: InvestmentSuggestion,
    history: Vec<HistoricalPoint>,
    reports: Vec<AnalysisReport>,
    holdings: Vec<CryptoHolding>,
    messages: Vec<MarketMessage>,
    next_message_id: i64,
}

/// Fixture-backed [`PortfolioService`]
pub struct FixtureService {
    state: Mutex<FixtureState>,
}

impl FixtureService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FixtureState::sample()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FixtureState> {
        // Fixture state is never poisoned: no holder panics while locked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for FixtureService {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureState {
    fn sample() -> Self {
        let allocation = vec![
            asset("1", "BTC", "比特币", 5.0, 42_000.0, 210_000.0, 21.0, -1.2),
            asset("2", "ETH", "以太坊", 50.0, 2_100.0, 105_000.0, 10.5, 0.8),
            asset("3", "SOL", "索拉纳", 500.0, 120.0, 60_000.0, 6.0, 3.2),
            asset("4", "USDT", "泰达币", 625_000.0, 1.0, 625_000.0, 62.5, 0.0),
        ];
        let overview = PortfolioOverview {
            total_value: 1_000_000.0,
            total_change24h: -25_000.0,
            total_change_percentage24h: -2.5,
            asset_allocation: allocation,
            last_updated: "2023-09-15T10:30:00Z".to_string(),
        };

        let news = vec![
            MarketNews {
                id: "1".to_string(),
                title: "比特币ETF申请获SEC批准进入最终审查阶段".to_string(),
                content: "美国证券交易委员会(SEC)已将比特币ETF申请推进至最终审查阶段，市场预期可能在未来3个月内获得批准。".to_string(),
                source: "Crypto News".to_string(),
                published_at: "2023-09-15T08:30:00Z".to_string(),
                sentiment: Sentiment::Positive,
                related_coins: vec!["BTC".to_string()],
                impact: Some(ImpactLevel::High),
            },
            MarketNews {
                id: "2".to_string(),
                title: "以太坊网络升级计划于下月启动".to_string(),
                content: "以太坊开发者宣布网络下一次重大升级计划于10月启动，预计将进一步提高网络吞吐量。".to_string(),
                source: "ETH Daily".to_string(),
                published_at: "2023-09-15T07:15:00Z".to_string(),
                sentiment: Sentiment::Positive,
                related_coins: vec!["ETH".to_string()],
                impact: Some(ImpactLevel::Medium),
            },
            MarketNews {
                id: "3".to_string(),
                title: "全球监管环境趋紧，多国加强加密货币监管力度".to_string(),
                content: "随着加密货币市场波动加剧，多个国家近期宣布加强监管措施，市场担忧情绪有所上升。".to_string(),
                source: "Financial Times".to_string(),
                published_at: "2023-09-14T22:45:00Z".to_string(),
                sentiment: Sentiment::Negative,
                related_coins: vec!["BTC".to_string(), "ETH".to_string(), "SOL".to_string()],
                impact: Some(ImpactLevel::High),
            },
        ];

        let suggestion = InvestmentSuggestion {
            id: "1".to_string(),
            date: "2023-09-15".to_string(),
            assets_to_increase: vec![
                adjustment("BTC", 21.0, 25.0, "ETF申请进展顺利，市场预期积极"),
                adjustment("ETH", 10.5, 13.0, "网络升级预期利好，技术面走强"),
            ],
            assets_to_decrease: vec![adjustment(
                "USDT",
                62.5,
                56.0,
                "当前稳定币比例过高，建议适当增加风险资产配置",
            )],
            summary: "建议适当增加BTC和ETH的配置比例，降低USDT的持有比例。".to_string(),
            status: ApprovalStatus::Pending,
            approval_time: None,
            approved_by: None,
        };

        let history = [
            ("2023-09-01", 980_000.0),
            ("2023-09-02", 985_000.0),
            ("2023-09-03", 995_000.0),
            ("2023-09-04", 1_010_000.0),
            ("2023-09-05", 1_008_000.0),
            ("2023-09-06", 1_020_000.0),
            ("2023-09-07", 1_015_000.0),
            ("2023-09-08", 1_025_000.0),
            ("2023-09-09", 1_030_000.0),
            ("2023-09-10", 1_028_000.0),
            ("2023-09-11", 1_040_000.0),
            ("2023-09-12", 1_035_000.0),
            ("2023-09-13", 1_030_000.0),
            ("2023-09-14", 1_025_000.0),
            ("2023-09-15", 1_000_000.0),
        ]
        .iter()
        .map(|(date, value)| HistoricalPoint {
            date: date.to_string(),
            total_value: *value,
            assets: Vec::new(),
        })
        .collect();

        let reports = vec![
            report(5, "2023-09-13", 1_030_000.0, -0.5, RiskLevel::Low, ApprovalStatus::Approved),
            report(6, "2023-09-14", 1_025_000.0, -0.5, RiskLevel::Medium, ApprovalStatus::Rejected),
            report(7, "2023-09-15", 1_000_000.0, -2.5, RiskLevel::Medium, ApprovalStatus::Pending),
        ];

        let holdings = vec![
            holding(1, "BTC", 5.0, 38_000.0, 42_000.0, 210_000.0, 21.0),
            holding(2, "ETH", 50.0, 2_300.0, 2_100.0, 105_000.0, 10.5),
            holding(3, "SOL", 500.0, 95.0, 120.0, 60_000.0, 6.0),
            holding(4, "USDT", 625_000.0, 1.0, 1.0, 625_000.0, 62.5),
        ];

        Self {
            overview,
            news,
            suggestion,
            history,
            reports,
            holdings,
            messages: Vec::new(),
            next_message_id: 1,
        }
    }
}

fn asset(
    id: &str,
    symbol: &str,
    name: &str,
    amount: f64,
    price: f64,
    total_value: f64,
    percentage: f64,
    change24h: f64,
) -> CryptoAsset {
    CryptoAsset {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        amount,
        price,
        total_value,
        percentage,
        change24h,
    }
}

fn adjustment(symbol: &str, current: f64, suggested: f64, reason: &str) -> AssetAdjustment {
    AssetAdjustment {
        symbol: symbol.to_string(),
        current_percentage: current,
        suggested_percentage: suggested,
        reason: reason.to_string(),
    }
}

fn report(
    id: i64,
    date: &str,
    total: f64,
    daily_change: f64,
    risk_level: RiskLevel,
    audit_status: ApprovalStatus,
) -> AnalysisReport {
    let decided = !audit_status.is_pending();
    AnalysisReport {
        id,
        report_date: date.to_string(),
        current_total_value: total,
        daily_change,
        suggested_adjustments: "维持当前配置，关注BTC仓位上限。".to_string(),
        market_summary: "市场整体震荡，主流币种波动收窄。".to_string(),
        risk_level,
        audit_status,
        audit_by: decided.then(|| "admin".to_string()),
        audit_time: decided.then(|| format!("{}T18:00:00Z", date)),
        audit_remark: None,
    }
}

fn holding(
    id: i64,
    currency: &str,
    quantity: f64,
    purchase_price: f64,
    current_price: f64,
    market_value: f64,
    allocation: f64,
) -> CryptoHolding {
    let cost = purchase_price * quantity;
    let profit_loss = market_value - cost;
    CryptoHolding {
        id,
        currency_type: currency.to_string(),
        quantity,
        purchase_price,
        current_price,
        market_value,
        profit_loss,
        profit_loss_rate: if cost > 0.0 { profit_loss / cost } else { 0.0 },
        allocation_percentage: allocation,
        last_updated: "2023-09-15T10:30:00Z".to_string(),
    }
}

#[async_trait]
impl PortfolioService for FixtureService {
    async fn portfolio_overview(&self) -> Result<PortfolioOverview, ApiError> {
        Ok(self.lock().overview.clone())
    }

    async fn market_news(&self, query: NewsQuery) -> Result<Page<MarketNews>, ApiError> {
        let state = self.lock();
        let rows: Vec<MarketNews> = state
            .news
            .iter()
            .filter(|item| {
                query
                    .sentiment
                    .map(|wanted| item.sentiment == wanted)
                    .unwrap_or(true)
            })
            .filter(|item| {
                query.symbols.is_empty()
                    || item
                        .related_coins
                        .iter()
                        .any(|coin| query.symbols.contains(coin))
            })
            .cloned()
            .collect();
        let total = rows.len() as u64;
        Ok(Page { rows, total })
    }

    async fn latest_suggestion(&self) -> Result<InvestmentSuggestion, ApiError> {
        Ok(self.lock().suggestion.clone())
    }

    async fn suggestion_history(
        &self,
        _query: SuggestionHistoryQuery,
    ) -> Result<Vec<InvestmentSuggestion>, ApiError> {
        Ok(vec![self.lock().suggestion.clone()])
    }

    async fn approve_suggestion(&self, params: ApproveSuggestionParams) -> Result<(), ApiError> {
        let mut state = self.lock();
        if state.suggestion.id != params.suggestion_id {
            return Err(ApiError::Server {
                code: 404,
                msg: "suggestion not found".to_string(),
            });
        }
        if !state.suggestion.status.is_pending() {
            return Err(ApiError::Server {
                code: 409,
                msg: "suggestion already decided".to_string(),
            });
        }
        state.suggestion.status = params.status;
        state.suggestion.approval_time = Some(chrono::Utc::now().to_rfc3339());
        state.suggestion.approved_by = Some("fixture".to_string());
        Ok(())
    }

    async fn historical_data(&self, query: HistoryQuery) -> Result<Vec<HistoricalPoint>, ApiError> {
        let state = self.lock();
        let mut points = state.history.clone();
        if let Some(days) = query.days {
            let keep = days as usize;
            if points.len() > keep {
                points = points.split_off(points.len() - keep);
            }
        }
        Ok(points)
    }

    async fn refresh_market_data(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn list_reports(
        &self,
        params: ReportListParams,
    ) -> Result<Page<AnalysisReport>, ApiError> {
        let state = self.lock();
        let rows: Vec<AnalysisReport> = state
            .reports
            .iter()
            .filter(|r| {
                params
                    .audit_status
                    .map(|wanted| r.audit_status == wanted)
                    .unwrap_or(true)
            })
            .filter(|r| {
                params
                    .risk_level
                    .map(|wanted| r.risk_level == wanted)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        let total = rows.len() as u64;
        Ok(Page { rows, total })
    }

    async fn latest_report(&self) -> Result<Option<AnalysisReport>, ApiError> {
        Ok(self.lock().reports.last().cloned())
    }

    async fn report_detail(&self, id: i64) -> Result<AnalysisReport, ApiError> {
        self.lock()
            .reports
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Server {
                code: 404,
                msg: "report not found".to_string(),
            })
    }

    async fn audit_report(&self, id: i64, request: AuditRequest) -> Result<(), ApiError> {
        let mut state = self.lock();
        let report = state
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::Server {
                code: 404,
                msg: "report not found".to_string(),
            })?;
        if !report.audit_status.is_pending() {
            return Err(ApiError::Server {
                code: 409,
                msg: "report already audited".to_string(),
            });
        }
        report.audit_status = request.status.resulting_status();
        report.audit_by = Some("fixture".to_string());
        report.audit_time = Some(chrono::Utc::now().to_rfc3339());
        report.audit_remark = request.remark;
        Ok(())
    }

    async fn export_reports(&self, params: ReportListParams) -> Result<Vec<u8>, ApiError> {
        let page = self.list_reports(params).await?;
        let mut body = String::from("id,reportDate,currentTotalValue,riskLevel,auditStatus\n");
        for report in &page.rows {
            body.push_str(&format!(
                "{},{},{:.2},{:?},{:?}\n",
                report.id,
                report.report_date,
                report.current_total_value,
                report.risk_level,
                report.audit_status
            ));
        }
        Ok(body.into_bytes())
    }

    async fn current_holdings(&self) -> Result<Vec<CryptoHolding>, ApiError> {
        Ok(self.lock().holdings.clone())
    }

    async fn currency_news(
        &self,
        currency_type: Option<String>,
    ) -> Result<Vec<MarketNews>, ApiError> {
        let state = self.lock();
        Ok(state
            .news
            .iter()
            .filter(|item| {
                currency_type
                    .as_ref()
                    .map(|currency| item.related_coins.contains(currency))
                    .unwrap_or(true)
            })
            .cloned()
            .collect())
    }

    async fn list_messages(
        &self,
        _query: MessageListQuery,
    ) -> Result<Page<MarketMessage>, ApiError> {
        let state = self.lock();
        Ok(Page {
            rows: state.messages.clone(),
            total: state.messages.len() as u64,
        })
    }

    async fn save_message(&self, message: MarketMessage) -> Result<(), ApiError> {
        let mut state = self.lock();
        let id = state.next_message_id;
        state.next_message_id += 1;
        state.messages.push(MarketMessage {
            id: Some(id),
            ..message
        });
        Ok(())
    }

    async fn update_message(&self, message: MarketMessage) -> Result<(), ApiError> {
        let mut state = self.lock();
        let Some(id) = message.id else {
            return Err(ApiError::Server {
                code: 400,
                msg: "message id required".to_string(),
            });
        };
        match state.messages.iter_mut().find(|m| m.id == Some(id)) {
            Some(existing) => {
                *existing = message;
                Ok(())
            }
            None => Err(ApiError::Server {
                code: 404,
                msg: "message not found".to_string(),
            }),
        }
    }

    async fn delete_messages(&self, ids: &[i64]) -> Result<(), ApiError> {
        let mut state = self.lock();
        state
            .messages
            .retain(|m| m.id.map(|id| !ids.contains(&id)).unwrap_or(true));
        Ok(())
    }

    async fn fetch_from_dify(&self) -> Result<(), ApiError> {
        let mut state = self.lock();
        let id = state.next_message_id;
        state.next_message_id += 1;
        state.messages.push(MarketMessage {
            id: Some(id),
            name: "BTC".to_string(),
            price: Some("42000".to_string()),
            emotion: Some("利好".to_string()),
            publish_time: Some(chrono::Utc::now().to_rfc3339()),
            content: Some("Dify同步消息".to_string()),
        });
        Ok(())
    }
}
