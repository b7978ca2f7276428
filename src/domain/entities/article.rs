use serde::{Deserialize, Serialize};

/// Title shown in place of real news when the news service can't be reached.
pub const UNAVAILABLE_TITLE: &str = "Unable to retrieve news data.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub content: String,
    pub url: String,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }

    /// Synthetic record signalling that news could not be fetched.
    pub fn placeholder(reason: &str) -> Self {
        Self {
            title: UNAVAILABLE_TITLE.to_string(),
            content: reason.to_string(),
            url: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.title == UNAVAILABLE_TITLE && self.url.is_empty()
    }
}

/// How a news query ended, carried next to the records it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsStatus {
    Found,
    EmptyResult,
    ProviderError,
}

/// Articles backing one headline, kept for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullArticleEntry {
    pub symbol: String,
    pub status: NewsStatus,
    pub articles: Vec<ArticleRecord>,
}
