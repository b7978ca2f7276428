use crate::application::news::NewsSettings;
use crate::application::pipeline::PipelineSettings;
use crate::domain::error::DomainError;
use crate::domain::values::threshold::NotableThreshold;
use crate::infrastructure::feeds::{alpha_vantage, newsapi};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Process-wide settings, read once at startup and handed to constructors.
#[derive(Debug, Clone)]
pub struct Config {
    pub stock_api_key: String,
    pub news_api_key: String,
    pub stock_endpoint: Url,
    pub news_endpoint: Url,
    pub symbol_suffix: String,
    pub threshold: NotableThreshold,
    pub concurrency: usize,
    pub request_timeout: Duration,
    /// Catalog JSON file; the bundled ASX 100 list when `None`.
    pub catalog_path: Option<PathBuf>,
    pub index_query: String,
    pub news_language: String,
}

impl Config {
    /// Read configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| DomainError::Config(format!("{key} is not set")))
        };

        let threshold = parse_or(&get, "ASXPULSE_THRESHOLD", NotableThreshold::DEFAULT)?;
        let threshold = NotableThreshold::new(threshold).map_err(DomainError::Config)?;

        let concurrency: usize = parse_or(&get, "ASXPULSE_CONCURRENCY", 4)?;
        if concurrency == 0 {
            return Err(DomainError::Config("ASXPULSE_CONCURRENCY must be at least 1".into()));
        }

        let timeout_secs: u64 = parse_or(&get, "ASXPULSE_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            return Err(DomainError::Config("ASXPULSE_TIMEOUT_SECS must be at least 1".into()));
        }

        Ok(Self {
            stock_api_key: required("STOCK_API_KEY")?,
            news_api_key: required("NEWS_API_KEY")?,
            stock_endpoint: parse_url(get("ASXPULSE_STOCK_ENDPOINT"), alpha_vantage::DEFAULT_BASE_URL)?,
            news_endpoint: parse_url(get("ASXPULSE_NEWS_ENDPOINT"), newsapi::DEFAULT_BASE_URL)?,
            // An explicitly empty suffix is meaningful, so read it without the blank filter.
            symbol_suffix: lookup("ASXPULSE_SYMBOL_SUFFIX").unwrap_or_else(|| ".AX".into()),
            threshold,
            concurrency,
            request_timeout: Duration::from_secs(timeout_secs),
            catalog_path: Self::catalog_path_from_lookup(&get),
            index_query: get("ASXPULSE_INDEX_QUERY").unwrap_or_else(|| "ASX 100".into()),
            news_language: get("ASXPULSE_NEWS_LANGUAGE").unwrap_or_else(|| "en".into()),
        })
    }

    /// Catalog override on its own, for commands that need no API keys.
    pub fn catalog_path_from_env() -> Option<PathBuf> {
        dotenv::dotenv().ok();
        Self::catalog_path_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn catalog_path_from_lookup<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("ASXPULSE_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            threshold: self.threshold,
            concurrency: self.concurrency,
            news: NewsSettings {
                index_query: self.index_query.clone(),
                language: self.news_language.clone(),
                ..NewsSettings::default()
            },
        }
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| DomainError::Config(format!("{key}={raw:?}: {e}"))),
    }
}

/// Base URLs get a trailing slash so `Url::join` appends instead of replacing.
fn parse_url(raw: Option<String>, default: &str) -> Result<Url, DomainError> {
    let mut raw = raw.unwrap_or_else(|| default.to_string());
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|e| DomainError::Config(format!("Invalid endpoint {raw}: {e}")))
}
