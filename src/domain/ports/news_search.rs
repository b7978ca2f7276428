use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::ProviderError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// Which article fields the query text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIn {
    Title,
    /// Title, description and body
    Content,
}

impl SearchIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIn::Title => "title",
            SearchIn::Content => "title,description,content",
        }
    }
}

/// Result ordering. Both pipeline queries rank by popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortBy {
    Popularity,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
        }
    }
}

/// A single free-text search against the news service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsQuery {
    pub text: String,
    pub search_in: SearchIn,
    pub sort_by: SortBy,
    /// Oldest publish date to include.
    pub from: NaiveDate,
    pub language: String,
    /// Upper bound on returned articles.
    pub limit: usize,
}

#[async_trait]
pub trait NewsSearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Run the query. An empty `Vec` is a successful search with no hits.
    async fn search(&self, query: &NewsQuery) -> Result<Vec<ArticleRecord>, ProviderError>;
}
