use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::listing::Listing;
use super::normalizer::normalize;
use super::parser::parse_children;
use super::selector::{Endpoint, ListingSelector};
use crate::error::{DirectoryError, Result};
use crate::models::{RedditListing, Session, Subreddit};
use crate::transport::Transport;

const SUBREDDIT_KIND: &str = "t5";

/// Fetches subreddit directory data through an injected [`Transport`].
///
/// Holds no per-call state, so one fetcher can serve concurrent callers.
pub struct DirectoryFetcher<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> DirectoryFetcher<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    /// Fetch one page of the default or a category listing.
    pub async fn fetch(&self, session: &Session, selector: &ListingSelector) -> Result<Listing> {
        let endpoint = Endpoint::Listing(selector);
        let url = endpoint.url(&self.base_url)?;
        let body = self.get(&url, Some(session)).await?;

        if !body.is_object() {
            return Err(not_an_object(url, &body));
        }
        let envelope = unwrap_listing(&body)?;

        let listing = parse_children(&envelope.data.children).inspect_err(|e| {
            warn!("Failed to parse listing from {}: {}", url, e);
        })?;
        debug!("Parsed {} subreddit(s) from {}", listing.len(), url);
        Ok(listing)
    }

    /// Fetch a single subreddit's `about.json`. Works without a session.
    pub async fn fetch_one(&self, name: &str, session: Option<&Session>) -> Result<Subreddit> {
        let url = Endpoint::About(name).url(&self.base_url)?;
        let body = self.get(&url, session).await?;

        if !body.is_object() {
            return Err(not_an_object(url, &body));
        }
        // Unknown names can come back as some other thing, e.g. a search Listing
        if let Some(kind) = body.get("kind").and_then(Value::as_str) {
            if kind != SUBREDDIT_KIND {
                return Err(DirectoryError::NotFoundOrUnparsable {
                    url,
                    reason: format!("expected a {} object, got kind {:?}", SUBREDDIT_KIND, kind),
                });
            }
        }

        normalize(&body).map_err(|e| {
            warn!("Failed to normalize r/{}: field {}: {}", name, e.field, e.reason);
            DirectoryError::FieldCoercion {
                field: e.field,
                index: None,
                reason: e.reason,
            }
        })
    }

    /// Search the default listing for `name`, ignoring case.
    ///
    /// `Ok(None)` means the listing was fetched fine and simply doesn't
    /// contain the name.
    pub async fn find_in_directory(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Option<Subreddit>> {
        let listing = self.fetch(session, &ListingSelector::Default).await?;
        let found = listing.find_by_name(name).cloned();
        if found.is_none() {
            debug!("r/{} not present in default listing", name);
        }
        Ok(found)
    }

    async fn get(&self, url: &str, session: Option<&Session>) -> Result<Value> {
        debug!("GET {} (session: {})", url, session.is_some());
        self.transport.get(url, session).await.map_err(|e| {
            warn!("Reddit GET {} failed: {}", url, e);
            DirectoryError::from(e)
        })
    }
}

fn unwrap_listing(body: &Value) -> Result<RedditListing> {
    RedditListing::deserialize(body).map_err(|e| {
        let field = if body.get("data").is_some_and(Value::is_object) {
            "children"
        } else {
            "data"
        };
        DirectoryError::FieldCoercion {
            field,
            index: None,
            reason: e.to_string(),
        }
    })
}

fn not_an_object(url: String, body: &Value) -> DirectoryError {
    let found = match body {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    DirectoryError::NotFoundOrUnparsable {
        url,
        reason: format!("expected a JSON object, got {}", found),
    }
}
