use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::Transport;
use crate::error::TransportError;
use crate::models::{AppConfig, Session};

/// Production transport backed by `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wrap an already-configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client with the user agent and timeout from config.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, TransportError> {
        Self::build(&cfg.reddit_user_agent, cfg.http_timeout)
    }

    pub fn build(user_agent: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(timeout)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, session: Option<&Session>) -> Result<Value, TransportError> {
        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(session) = session {
            request = request.header(COOKIE, session.cookie_header());
        }

        let resp = request.send().await?;
        let status = resp.status();
        debug!("Reddit GET {} -> {}", url, status);

        if status == StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::UnparsableBody {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryFetcher, ListingSelector};
    use crate::error::DirectoryError;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn transport() -> HttpTransport {
        HttpTransport::build("test-agent", Duration::from_secs(5)).expect("client should build")
    }

    fn about_body(name: &str) -> String {
        json!({
            "kind": "t5",
            "data": {
                "created": 1201233135.0,
                "created_utc": 1201204335.0,
                "description": "",
                "display_name": name,
                "id": "2s7lj",
                "over18": false,
                "subscribers": 300000,
                "title": name,
                "url": format!("/r/{}/", name)
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_error() {
        // Nothing listens on port 1
        let err = transport()
            .get("http://127.0.0.1:1/reddits.json", None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_http_404_is_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/r/programming1234/about.json")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found", "error": 404}"#)
            .expect(2)
            .create_async()
            .await;

        let url = format!("{}/r/programming1234/about.json", server.url());
        let err = transport().get(&url, None).await.unwrap_err();
        assert!(matches!(err, TransportError::NotFound { .. }), "got {:?}", err);

        let fetcher = DirectoryFetcher::new(transport(), server.url());
        let err = fetcher.fetch_one("programming1234", None).await.unwrap_err();
        match err {
            DirectoryError::NotFoundOrUnparsable { reason, .. } => assert_eq!(reason, "HTTP 404"),
            other => panic!("unexpected error: {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_html_body_is_unparsable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/r/gone/about.json")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>search results</body></html>")
            .create_async()
            .await;

        let url = format!("{}/r/gone/about.json", server.url());
        let err = transport().get(&url, None).await.unwrap_err();
        assert!(matches!(err, TransportError::UnparsableBody { .. }), "got {:?}", err);

        let fetcher = DirectoryFetcher::new(transport(), server.url());
        let err = fetcher.fetch_one("gone", None).await.unwrap_err();
        assert!(
            matches!(err, DirectoryError::NotFoundOrUnparsable { .. }),
            "got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/reddits.json")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let fetcher = DirectoryFetcher::new(transport(), server.url());
        let err = fetcher
            .fetch(&Session::new("abc123"), &ListingSelector::Default)
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                DirectoryError::Transport(TransportError::Status { status: 503, .. })
            ),
            "got {:?}",
            err
        );
        // Surfaced once, never retried
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent_for_listings() {
        let mut server = Server::new_async().await;
        let listing = json!({
            "kind": "Listing",
            "data": { "children": [serde_json::from_str::<Value>(&about_body("rust")).unwrap()] }
        });
        let mock = server
            .mock("GET", "/reddits.json")
            .match_header("cookie", "reddit_session=abc123")
            .match_header("accept", "application/json")
            .match_header("user-agent", "test-agent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(listing.to_string())
            .create_async()
            .await;

        let fetcher = DirectoryFetcher::new(transport(), server.url());
        let listing = fetcher
            .fetch(&Session::new("abc123"), &ListingSelector::Default)
            .await
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.as_slice()[0].display_name(), "rust");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_anonymous_about_sends_no_cookie() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/r/rust/about.json")
            .match_header("cookie", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(about_body("rust"))
            .create_async()
            .await;

        let fetcher = DirectoryFetcher::new(transport(), server.url());
        let sub = fetcher.fetch_one("rust", None).await.unwrap();
        assert_eq!(sub.subscriber_count(), 300_000);
        mock.assert_async().await;
    }
}
