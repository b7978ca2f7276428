pub mod alpha_vantage;
pub mod newsapi;

use crate::domain::error::ProviderError;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("asxpulse/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client settings for upstream feeds. The timeout applies
/// per request and is the only cancellation the pipeline needs.
pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("HTTP client build failed, requests will have no timeout: {e}");
            reqwest::Client::default()
        })
}

/// Resolve `path` against a service base URL.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, ProviderError> {
    base.join(path)
        .map_err(|e| ProviderError::Network(format!("Bad endpoint {base}{path}: {e}")))
}

/// Send a GET and return the body of a 2xx response.
pub(crate) async fn get_text(
    request: reqwest::RequestBuilder,
    what: &str,
) -> Result<String, ProviderError> {
    let resp = request.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            what: what.to_string(),
        });
    }
    Ok(resp.text().await?)
}
