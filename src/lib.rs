pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::format::{ArticleFormatter, HtmlFormatter, PlainFormatter};
use crate::application::pipeline::{AggregationPipeline, Dashboard, PipelineSettings};
use crate::config::Config;
use crate::domain::entities::company::SymbolCatalog;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::ports::news_search::NewsSearchProvider;
use crate::domain::values::movement::MovementResult;
use crate::infrastructure::catalog::{bundled_catalog, load_catalog};
use crate::infrastructure::feeds::alpha_vantage::AlphaVantageProvider;
use crate::infrastructure::feeds::newsapi::NewsApiProvider;
use std::sync::Arc;

/// Output medium for formatted ticker and headline lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    #[default]
    Plain,
    Html,
}

impl Markup {
    fn formatter(self) -> Arc<dyn ArticleFormatter> {
        match self {
            Markup::Plain => Arc::new(PlainFormatter),
            Markup::Html => Arc::new(HtmlFormatter),
        }
    }
}

pub struct AsxPulse {
    catalog: Arc<SymbolCatalog>,
    pipeline: AggregationPipeline,
}

impl AsxPulse {
    /// Wire the live Alpha Vantage and NewsAPI adapters from `config`.
    pub fn new(config: &Config, markup: Markup) -> Result<Self, DomainError> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => bundled_catalog()?,
        };

        let market: Arc<dyn MarketDataProvider> = Arc::new(AlphaVantageProvider::new(
            config.stock_api_key.clone(),
            config.stock_endpoint.clone(),
            config.symbol_suffix.clone(),
            config.request_timeout,
        ));
        let news: Arc<dyn NewsSearchProvider> = Arc::new(NewsApiProvider::new(
            config.news_api_key.clone(),
            config.news_endpoint.clone(),
            config.request_timeout,
        ));

        tracing::debug!(symbols = catalog.len(), threshold = %config.threshold, "initialised");

        Ok(Self::with_providers(
            catalog,
            market,
            news,
            markup,
            config.pipeline_settings(),
        ))
    }

    pub fn with_providers(
        catalog: SymbolCatalog,
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsSearchProvider>,
        markup: Markup,
        settings: PipelineSettings,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            pipeline: AggregationPipeline::new(
                catalog.clone(),
                market,
                news,
                markup.formatter(),
                settings,
            ),
            catalog,
        }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.catalog.lookup(symbol)
    }

    pub async fn movement(&self, symbol: &str) -> MovementResult {
        self.pipeline.fetch_movement(symbol).await
    }

    pub async fn run(&self) -> Dashboard {
        self.pipeline.run().await
    }
}
