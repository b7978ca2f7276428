use asxpulse::domain::error::ProviderError;
use asxpulse::domain::ports::news_search::{NewsQuery, NewsSearchProvider, SearchIn, SortBy};
use asxpulse::infrastructure::feeds::newsapi::NewsApiProvider;
use chrono::NaiveDate;
use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use url::Url;

fn provider(server: &MockServer) -> NewsApiProvider {
    NewsApiProvider::new(
        "news-key".into(),
        Url::parse(&format!("{}/", server.base_url())).unwrap(),
        Duration::from_secs(5),
    )
}

fn query(text: &str, search_in: SearchIn, limit: usize) -> NewsQuery {
    NewsQuery {
        text: text.into(),
        search_in,
        sort_by: SortBy::Popularity,
        from: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
        language: "en".into(),
        limit,
    }
}

#[tokio::test]
async fn test_everything_sends_query_params() {
    let server = MockServer::start();

    let body = r#"{
      "status": "ok",
      "totalResults": 2,
      "articles": [
        {"source": {"id": null, "name": "AFR"}, "author": "A", "title": "Westpac profit slides", "description": "d", "url": "https://afr.example/wbc", "content": "Westpac said..."},
        {"source": {"id": null, "name": "ABC"}, "author": "B", "title": "Banks sell off", "description": "d", "url": "https://abc.example/banks", "content": null}
      ]
    }"#;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .header("X-Api-Key", "news-key")
            .query_param("q", "Westpac Banking Corporation")
            .query_param("searchIn", "title,description,content")
            .query_param("sortBy", "popularity")
            .query_param("from", "2025-02-20")
            .query_param("language", "en")
            .query_param("pageSize", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let articles = provider(&server)
        .search(&query("Westpac Banking Corporation", SearchIn::Content, 1))
        .await
        .unwrap();
    mock.assert();

    // Upstream ignored pageSize; the adapter still honours the limit.
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Westpac profit slides");
    assert_eq!(articles[0].url, "https://afr.example/wbc");
}

#[tokio::test]
async fn test_empty_result_is_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything").query_param("searchIn", "title");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "ok", "totalResults": 0, "articles": []}"#);
    });

    let articles = provider(&server)
        .search(&query("ASX 100", SearchIn::Title, 2))
        .await
        .unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_error_body_on_401_is_upstream_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid or incorrect."}"#);
    });

    let result = provider(&server).search(&query("BHP", SearchIn::Content, 1)).await;
    match result {
        Err(ProviderError::Upstream(msg)) => assert!(msg.starts_with("apiKeyInvalid")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_is_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let result = provider(&server).search(&query("BHP", SearchIn::Content, 1)).await;
    assert!(matches!(result, Err(ProviderError::Status { status: 502, .. })));
}
