use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Number, Value};

/// Reddit API models
#[derive(Debug, Deserialize)]
pub struct RedditListing {
    pub data: RedditListingData,
}

/// Children stay as raw JSON so each one can be normalized (and blamed) on its own.
#[derive(Debug, Deserialize)]
pub struct RedditListingData {
    pub children: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RedditChild {
    pub data: SubredditData,
}

/// The `data` object of a `t5` (subreddit) thing.
///
/// Every field is optional at this layer: absence and `null` both decode to
/// `None` and are rejected later by the normalizer with the field's name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubredditData {
    pub created: Option<Scalar>,
    pub created_utc: Option<Scalar>,
    pub description: Option<Scalar>,
    pub display_name: Option<Scalar>,
    pub id: Option<Scalar>,
    pub over18: Option<Scalar>,
    pub subscribers: Option<Scalar>,
    pub title: Option<Scalar>,
    pub url: Option<Scalar>,
}

/// A JSON leaf value, or a marker that something non-scalar was found.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Flag(bool),
    Number(Number),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Flag(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Other(_) => "array or object",
        }
    }
}
