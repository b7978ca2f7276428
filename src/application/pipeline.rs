//! Aggregation pipeline. Turns the symbol catalog into a ticker strip,
//! notable-move headlines and an index news digest.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::application::format::ArticleFormatter;
use crate::application::news::{search_company, search_index, NewsSettings};
use crate::domain::entities::article::{ArticleRecord, FullArticleEntry, NewsStatus};
use crate::domain::entities::company::{CompanyRecord, SymbolCatalog};
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::ports::news_search::NewsSearchProvider;
use crate::domain::values::movement::{Movement, MovementResult};
use crate::domain::values::threshold::NotableThreshold;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSettings {
    pub threshold: NotableThreshold,
    /// Symbols processed at once. 1 gives strictly sequential calls.
    pub concurrency: usize,
    pub news: NewsSettings,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            threshold: NotableThreshold::default(),
            concurrency: 4,
            news: NewsSettings::default(),
        }
    }
}

/// One pipeline snapshot, ready for rendering.
///
/// `headlines` and `full_articles` are index-aligned; all three
/// per-symbol lists follow catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub ticker_points: Vec<String>,
    pub headlines: Vec<String>,
    pub full_articles: Vec<FullArticleEntry>,
    /// Latest session date seen; `None` when no symbol had market data.
    pub anchor_date: Option<NaiveDate>,
    pub index_digest: Vec<ArticleRecord>,
    /// `None` when there was no anchor date and so no index query.
    pub index_digest_status: Option<NewsStatus>,
    pub symbols_scanned: usize,
    pub symbols_skipped: usize,
}

/// What a single symbol contributes to the dashboard.
struct SymbolReport {
    movement: Movement,
    ticker_point: String,
    headline: Option<(String, FullArticleEntry)>,
}

pub struct AggregationPipeline {
    catalog: Arc<SymbolCatalog>,
    market: Arc<dyn MarketDataProvider>,
    news: Arc<dyn NewsSearchProvider>,
    formatter: Arc<dyn ArticleFormatter>,
    settings: PipelineSettings,
}

impl AggregationPipeline {
    pub fn new(
        catalog: Arc<SymbolCatalog>,
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsSearchProvider>,
        formatter: Arc<dyn ArticleFormatter>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            catalog,
            market,
            news,
            formatter,
            settings,
        }
    }

    /// Latest move for one symbol. Upstream failures are logged and
    /// reported as `Unknown`.
    pub async fn fetch_movement(&self, symbol: &str) -> MovementResult {
        match self.market.latest_session(symbol).await {
            Ok(Some(session)) => MovementResult::from_session(&session),
            Ok(None) => {
                tracing::debug!(symbol, provider = self.market.name(), "no session data");
                MovementResult::Unknown
            }
            Err(e) => {
                tracing::warn!(symbol, provider = self.market.name(), "market data failed: {e}");
                MovementResult::Unknown
            }
        }
    }

    /// Run one full snapshot over the catalog.
    pub async fn run(&self) -> Dashboard {
        let generated_at = Utc::now();
        let concurrency = self.settings.concurrency.max(1);

        // `buffered` yields in input order, so the merge keeps catalog order.
        let reports: Vec<Option<SymbolReport>> = stream::iter(self.catalog.records())
            .map(|record| self.process_symbol(record))
            .buffered(concurrency)
            .collect()
            .await;

        let symbols_scanned = reports.len();
        let mut ticker_points = Vec::new();
        let mut headlines = Vec::new();
        let mut full_articles = Vec::new();
        let mut anchor_date: Option<NaiveDate> = None;

        for report in reports.into_iter().flatten() {
            let date = report.movement.session_date;
            anchor_date = Some(anchor_date.map_or(date, |d| d.max(date)));
            ticker_points.push(report.ticker_point);
            if let Some((headline, entry)) = report.headline {
                headlines.push(headline);
                full_articles.push(entry);
            }
        }
        let symbols_skipped = symbols_scanned - ticker_points.len();

        let (index_digest, index_digest_status) = match anchor_date {
            Some(anchor) => {
                let outcome = search_index(self.news.as_ref(), &self.settings.news, anchor).await;
                let status = outcome.status();
                (outcome.into_records(self.settings.news.index_limit), Some(status))
            }
            None => {
                tracing::warn!("no market data for any symbol; skipping index digest");
                (Vec::new(), None)
            }
        };

        tracing::info!(
            scanned = symbols_scanned,
            skipped = symbols_skipped,
            notable = headlines.len(),
            digest = index_digest.len(),
            "pipeline run complete"
        );

        Dashboard {
            generated_at,
            ticker_points,
            headlines,
            full_articles,
            anchor_date,
            index_digest,
            index_digest_status,
            symbols_scanned,
            symbols_skipped,
        }
    }

    async fn process_symbol(&self, record: &CompanyRecord) -> Option<SymbolReport> {
        let symbol = record.symbol.as_str();
        let movement = match self.fetch_movement(symbol).await {
            MovementResult::Known(m) => m,
            MovementResult::Unknown => return None,
        };

        let ticker_point = self.formatter.format_ticker_point(symbol, &movement);
        tracing::debug!(symbol, change = movement.percent_change, "movement");

        if !self.settings.threshold.is_notable(Some(movement.percent_change)) {
            return Some(SymbolReport {
                movement,
                ticker_point,
                headline: None,
            });
        }

        // Unnamed companies fall back to searching by ticker.
        let company_name = self.catalog.lookup(symbol).unwrap_or_default();
        let query_terms = if company_name.is_empty() { symbol } else { company_name };
        let outcome = search_company(
            self.news.as_ref(),
            &self.settings.news,
            query_terms,
            movement.session_date,
        )
        .await;
        let status = outcome.status();
        let articles = outcome.into_records(self.settings.news.company_limit);

        let headline = self
            .formatter
            .format_headline(symbol, query_terms, &movement, &articles);

        Some(SymbolReport {
            movement,
            ticker_point,
            headline: Some((
                headline,
                FullArticleEntry {
                    symbol: symbol.to_string(),
                    status,
                    articles,
                },
            )),
        })
    }
}
