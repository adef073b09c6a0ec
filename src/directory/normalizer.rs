//! Turns one raw `t5` child node into a [`Subreddit`].

use serde::Deserialize;
use serde_json::Value;

use crate::models::subreddit::SubredditFields;
use crate::models::{RedditChild, Scalar, Subreddit, SubredditData};

/// A required field that was missing or could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// Key as it appears in the API payload.
    pub field: &'static str,
    pub reason: String,
}

impl CoercionError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Normalize a child node of the form `{"data": {...}}`.
///
/// The whole record fails on the first field that is missing or has the
/// wrong type; nothing is defaulted.
pub fn normalize(node: &Value) -> Result<Subreddit, CoercionError> {
    if !node.get("data").is_some_and(Value::is_object) {
        return Err(CoercionError::new("data", "expected a `data` object"));
    }
    let child =
        RedditChild::deserialize(node).map_err(|e| CoercionError::new("data", e.to_string()))?;
    normalize_data(child.data)
}

/// Normalize an already-decoded `data` object.
pub fn normalize_data(data: SubredditData) -> Result<Subreddit, CoercionError> {
    let display_name = non_empty("display_name", text("display_name", data.display_name)?)?;
    let id = non_empty("id", text("id", data.id)?)?;

    Ok(Subreddit::from_fields(SubredditFields {
        id,
        display_name,
        title: text("title", data.title)?,
        description: text("description", data.description)?,
        url: text("url", data.url)?,
        created: text("created", data.created)?,
        created_utc: text("created_utc", data.created_utc)?,
        nsfw: flag("over18", data.over18)?,
        subscriber_count: count("subscribers", data.subscribers)?,
    }))
}

fn required(field: &'static str, value: Option<Scalar>) -> Result<Scalar, CoercionError> {
    value.ok_or_else(|| CoercionError::new(field, "missing or null"))
}

/// Strings are taken verbatim; numbers and booleans keep their JSON spelling.
fn text(field: &'static str, value: Option<Scalar>) -> Result<String, CoercionError> {
    match required(field, value)? {
        Scalar::Text(s) => Ok(s),
        Scalar::Number(n) => Ok(n.to_string()),
        Scalar::Flag(b) => Ok(b.to_string()),
        other => Err(CoercionError::new(
            field,
            format!("expected a string, found {}", other.kind()),
        )),
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, CoercionError> {
    if value.is_empty() {
        Err(CoercionError::new(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

fn flag(field: &'static str, value: Option<Scalar>) -> Result<bool, CoercionError> {
    match required(field, value)? {
        Scalar::Flag(b) => Ok(b),
        Scalar::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Scalar::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        Scalar::Text(s) => Err(CoercionError::new(
            field,
            format!("expected a boolean, found {:?}", s),
        )),
        other => Err(CoercionError::new(
            field,
            format!("expected a boolean, found {}", other.kind()),
        )),
    }
}

fn count(field: &'static str, value: Option<Scalar>) -> Result<u64, CoercionError> {
    match required(field, value)? {
        Scalar::Number(n) => n.as_u64().ok_or_else(|| {
            CoercionError::new(
                field,
                format!("expected a non-negative integer, found {}", n),
            )
        }),
        Scalar::Text(s) => s.trim().parse::<u64>().map_err(|_| {
            CoercionError::new(
                field,
                format!("expected a non-negative integer, found {:?}", s),
            )
        }),
        other => Err(CoercionError::new(
            field,
            format!("expected a non-negative integer, found {}", other.kind()),
        )),
    }
}
