//! Shared test helpers: in-memory providers with canned replies.

#![allow(dead_code)]

use async_trait::async_trait;
use asxpulse::application::pipeline::PipelineSettings;
use asxpulse::domain::entities::article::ArticleRecord;
use asxpulse::domain::entities::company::{CompanyRecord, SymbolCatalog};
use asxpulse::domain::error::ProviderError;
use asxpulse::domain::ports::market_data::MarketDataProvider;
use asxpulse::domain::ports::news_search::{NewsQuery, NewsSearchProvider};
use asxpulse::domain::values::movement::DailySession;
use asxpulse::domain::values::threshold::NotableThreshold;
use asxpulse::{AsxPulse, Markup};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn session(date: NaiveDate, open: f64, close: f64) -> DailySession {
    DailySession { date, open, close }
}

pub fn article(title: &str) -> ArticleRecord {
    ArticleRecord::new(title, format!("{title} content"), format!("https://news.example/{}", title.replace(' ', "-")))
}

pub fn catalog(pairs: &[(&str, &str)]) -> SymbolCatalog {
    SymbolCatalog::from_records(
        pairs
            .iter()
            .map(|(s, n)| CompanyRecord::new(*s, *n))
            .collect(),
    )
    .unwrap()
}

/// Market data keyed by symbol. Unlisted symbols have no session.
#[derive(Default)]
pub struct StubMarket {
    replies: HashMap<String, Result<Option<DailySession>, ProviderError>>,
}

impl StubMarket {
    pub fn with(mut self, symbol: &str, reply: Result<Option<DailySession>, ProviderError>) -> Self {
        self.replies.insert(symbol.to_string(), reply);
        self
    }

    pub fn session(self, symbol: &str, session: DailySession) -> Self {
        self.with(symbol, Ok(Some(session)))
    }
}

#[async_trait]
impl MarketDataProvider for StubMarket {
    fn name(&self) -> &str {
        "stub_market"
    }

    async fn latest_session(&self, symbol: &str) -> Result<Option<DailySession>, ProviderError> {
        self.replies.get(symbol).cloned().unwrap_or(Ok(None))
    }
}

/// News keyed by query text. Unknown queries return no articles.
/// Every query is recorded.
#[derive(Default)]
pub struct StubNews {
    replies: HashMap<String, Result<Vec<ArticleRecord>, ProviderError>>,
    pub queries: Mutex<Vec<NewsQuery>>,
}

impl StubNews {
    pub fn with(mut self, text: &str, reply: Result<Vec<ArticleRecord>, ProviderError>) -> Self {
        self.replies.insert(text.to_string(), reply);
        self
    }

    pub fn seen(&self) -> Vec<NewsQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSearchProvider for StubNews {
    fn name(&self) -> &str {
        "stub_news"
    }

    async fn search(&self, query: &NewsQuery) -> Result<Vec<ArticleRecord>, ProviderError> {
        self.queries.lock().unwrap().push(query.clone());
        self.replies.get(&query.text).cloned().unwrap_or(Ok(vec![]))
    }
}

pub fn settings(threshold: f64) -> PipelineSettings {
    PipelineSettings {
        threshold: NotableThreshold::new(threshold).unwrap(),
        ..PipelineSettings::default()
    }
}

pub fn setup(
    catalog: SymbolCatalog,
    market: StubMarket,
    news: Arc<StubNews>,
    threshold: f64,
) -> AsxPulse {
    AsxPulse::with_providers(catalog, Arc::new(market), news, Markup::Plain, settings(threshold))
}
