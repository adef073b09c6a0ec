use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::models::Session;

pub mod http_transport;
#[cfg(test)]
pub mod mock_transport;

pub use http_transport::HttpTransport;

/// Transport defines the single GET operation the directory layer needs.
///
/// This trait abstracts the HTTP client so the fetcher can be driven by an
/// in-memory fake in tests. Implementations own timeouts; callers never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and parse the body as JSON.
    ///
    /// The session, when given, is attached as the user's credential.
    async fn get(&self, url: &str, session: Option<&Session>) -> Result<Value, TransportError>;
}
