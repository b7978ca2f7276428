use super::{endpoint, http_client};
use crate::domain::entities::article::ArticleRecord;
use crate::domain::error::ProviderError;
use crate::domain::ports::news_search::{NewsQuery, NewsSearchProvider};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/";

/// NewsAPI marks takedowns with this title and a dead URL.
const REMOVED_MARKER: &str = "[Removed]";

/// NewsAPI `/v2/everything` search.
pub struct NewsApiProvider {
    api_key: String,
    base_url: Url,
    client: reqwest::Client,
}

impl NewsApiProvider {
    pub fn new(api_key: String, base_url: Url, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url,
            client: http_client(timeout),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, serde::Deserialize)]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[async_trait]
impl NewsSearchProvider for NewsApiProvider {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn search(&self, query: &NewsQuery) -> Result<Vec<ArticleRecord>, ProviderError> {
        let mut url = endpoint(&self.base_url, "v2/everything")?;
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("searchIn", query.search_in.as_str())
            .append_pair("sortBy", query.sort_by.as_str())
            .append_pair("from", &query.from.format("%Y-%m-%d").to_string())
            .append_pair("language", &query.language)
            .append_pair("pageSize", &query.limit.clamp(1, 100).to_string());

        let resp = self
            .client
            .get(url)
            .header("X-Api-Key", self.api_key.as_str())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        // Error bodies carry a code/message even on 4xx; prefer those.
        let data: EverythingResponse = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(_) if !status.is_success() => {
                return Err(ProviderError::Status {
                    status: status.as_u16(),
                    what: format!("news search {:?}", query.text),
                })
            }
            Err(e) => return Err(ProviderError::Parse(e.to_string())),
        };

        let mut articles = parse_articles(data)?;
        articles.truncate(query.limit);
        Ok(articles)
    }
}

fn parse_articles(data: EverythingResponse) -> Result<Vec<ArticleRecord>, ProviderError> {
    if data.status != "ok" {
        let code = data.code.unwrap_or_else(|| "unknown".into());
        let message = data.message.unwrap_or_default();
        return Err(if code == "rateLimited" {
            ProviderError::RateLimited(message)
        } else {
            ProviderError::Upstream(format!("{code}: {message}"))
        });
    }

    data.articles
        .into_iter()
        .filter(|a| a.title.as_deref() != Some(REMOVED_MARKER))
        .map(|a| {
            let title = a
                .title
                .ok_or_else(|| ProviderError::Parse("Article missing title".into()))?;
            let url = a
                .url
                .ok_or_else(|| ProviderError::Parse(format!("Article {title:?} missing url")))?;
            Ok(ArticleRecord {
                title,
                content: a.content.unwrap_or_default(),
                url,
            })
        })
        .collect()
}
