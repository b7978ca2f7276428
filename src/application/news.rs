//! News lookups used by the pipeline.
//!
//! Both query shapes go through [`NewsSearchProvider`] and come back as a
//! [`NewsOutcome`], which keeps "no news" and "news service down" apart
//! until the very last step where records are handed to the formatter.

use crate::domain::entities::article::{ArticleRecord, NewsStatus};
use crate::domain::error::ProviderError;
use crate::domain::ports::news_search::{NewsQuery, NewsSearchProvider, SearchIn, SortBy};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Look-back and shape settings for news queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSettings {
    /// Days before a symbol's session date to start the company search.
    pub company_lookback_days: u64,
    pub company_limit: usize,
    /// Days before the anchor date to start the index search.
    pub index_lookback_days: u64,
    pub index_limit: usize,
    /// Phrase searched for in titles for the index-wide digest.
    pub index_query: String,
    pub language: String,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            company_lookback_days: 1,
            company_limit: 1,
            index_lookback_days: 3,
            index_limit: 2,
            index_query: "ASX 100".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsOutcome {
    Found(Vec<ArticleRecord>),
    EmptyResult,
    ProviderError(String),
}

impl NewsOutcome {
    fn from_result(result: Result<Vec<ArticleRecord>, ProviderError>, limit: usize) -> Self {
        match result {
            Ok(mut articles) if !articles.is_empty() => {
                articles.truncate(limit);
                NewsOutcome::Found(articles)
            }
            Ok(_) => NewsOutcome::EmptyResult,
            Err(e) => NewsOutcome::ProviderError(e.to_string()),
        }
    }

    pub fn status(&self) -> NewsStatus {
        match self {
            NewsOutcome::Found(_) => NewsStatus::Found,
            NewsOutcome::EmptyResult => NewsStatus::EmptyResult,
            NewsOutcome::ProviderError(_) => NewsStatus::ProviderError,
        }
    }

    /// Records to render. An error becomes `placeholders` synthetic
    /// "unavailable" records so the output is never empty on failure.
    pub fn into_records(self, placeholders: usize) -> Vec<ArticleRecord> {
        match self {
            NewsOutcome::Found(articles) => articles,
            NewsOutcome::EmptyResult => Vec::new(),
            NewsOutcome::ProviderError(reason) => (0..placeholders.max(1))
                .map(|_| ArticleRecord::placeholder(&reason))
                .collect(),
        }
    }
}

/// Most popular article mentioning the company since the day before its session.
pub async fn search_company(
    provider: &dyn NewsSearchProvider,
    settings: &NewsSettings,
    query_terms: &str,
    session_date: NaiveDate,
) -> NewsOutcome {
    let query = NewsQuery {
        text: query_terms.to_string(),
        search_in: SearchIn::Content,
        sort_by: SortBy::Popularity,
        from: days_before(session_date, settings.company_lookback_days),
        language: settings.language.clone(),
        limit: settings.company_limit,
    };
    let outcome = NewsOutcome::from_result(provider.search(&query).await, query.limit);
    if let NewsOutcome::ProviderError(reason) = &outcome {
        tracing::warn!(provider = provider.name(), query = query_terms, "company news unavailable: {reason}");
    }
    outcome
}

/// Index-wide headlines from the few days before `anchor_date`.
pub async fn search_index(
    provider: &dyn NewsSearchProvider,
    settings: &NewsSettings,
    anchor_date: NaiveDate,
) -> NewsOutcome {
    let query = NewsQuery {
        text: settings.index_query.clone(),
        search_in: SearchIn::Title,
        sort_by: SortBy::Popularity,
        from: days_before(anchor_date, settings.index_lookback_days),
        language: settings.language.clone(),
        limit: settings.index_limit,
    };
    let outcome = NewsOutcome::from_result(provider.search(&query).await, query.limit);
    if let NewsOutcome::ProviderError(reason) = &outcome {
        tracing::warn!(provider = provider.name(), "index news unavailable: {reason}");
    }
    outcome
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
