use super::{endpoint, get_text, http_client};
use crate::domain::error::ProviderError;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::values::movement::DailySession;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";

/// Alpha Vantage `TIME_SERIES_DAILY` market data.
pub struct AlphaVantageProvider {
    api_key: String,
    base_url: Url,
    /// Exchange suffix appended to catalog symbols (e.g. ".AX").
    symbol_suffix: String,
    client: reqwest::Client,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String, base_url: Url, symbol_suffix: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url,
            symbol_suffix,
            client: http_client(timeout),
        }
    }

    fn upstream_symbol(&self, symbol: &str) -> String {
        if self.symbol_suffix.is_empty() || symbol.ends_with(&self.symbol_suffix) {
            symbol.to_string()
        } else {
            format!("{symbol}{}", self.symbol_suffix)
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct DailySeriesResponse {
    #[serde(rename = "Time Series (Daily)", default)]
    series: Option<BTreeMap<String, DailyBar>>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct DailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "4. close")]
    close: String,
}

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "alpha_vantage"
    }

    async fn latest_session(&self, symbol: &str) -> Result<Option<DailySession>, ProviderError> {
        let upstream = self.upstream_symbol(symbol);
        let mut url = endpoint(&self.base_url, "query")?;
        url.query_pairs_mut()
            .append_pair("function", "TIME_SERIES_DAILY")
            .append_pair("symbol", &upstream)
            .append_pair("outputsize", "compact")
            .append_pair("apikey", &self.api_key);

        let body = get_text(self.client.get(url), &upstream).await?;
        parse_daily_series(&body)
    }
}

/// Pick the latest session out of a `TIME_SERIES_DAILY` body.
fn parse_daily_series(body: &str) -> Result<Option<DailySession>, ProviderError> {
    let data: DailySeriesResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if let Some(note) = data.note {
        return Err(ProviderError::RateLimited(note));
    }
    if let Some(info) = data.information {
        return Err(if info.to_lowercase().contains("rate limit") {
            ProviderError::RateLimited(info)
        } else {
            ProviderError::Upstream(info)
        });
    }
    // Unknown symbols come back as an error message; that's "no data".
    if let Some(msg) = data.error_message {
        tracing::debug!("alpha vantage has no series: {msg}");
        return Ok(None);
    }

    // Date keys are ISO `YYYY-MM-DD`, so the greatest key is the latest session.
    let Some((date, bar)) = data.series.as_ref().and_then(|s| s.last_key_value()) else {
        return Ok(None);
    };

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| ProviderError::Parse(format!("Bad session date {date}: {e}")))?;
    Ok(Some(DailySession {
        date,
        open: parse_price(&bar.open)?,
        close: parse_price(&bar.close)?,
    }))
}

fn parse_price(raw: &str) -> Result<f64, ProviderError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ProviderError::Parse(format!("Bad price {raw:?}: {e}")))
}
