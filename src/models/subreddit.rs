use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized subreddit record.
///
/// Built only by the normalizer, so every field is populated and coerced.
/// Fields are read through accessors; a record never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subreddit {
    id: String,
    display_name: String,
    name: String,
    title: String,
    description: String,
    url: String,
    created: String,
    created_utc: String,
    nsfw: bool,
    subscriber_count: u64,
}

/// Already-coerced field values, assembled by the normalizer.
#[derive(Debug, Clone)]
pub(crate) struct SubredditFields {
    pub id: String,
    pub display_name: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub created: String,
    pub created_utc: String,
    pub nsfw: bool,
    pub subscriber_count: u64,
}

impl Subreddit {
    pub(crate) fn from_fields(fields: SubredditFields) -> Self {
        Self {
            name: fields.display_name.clone(),
            id: fields.id,
            display_name: fields.display_name,
            title: fields.title,
            description: fields.description,
            url: fields.url,
            created: fields.created,
            created_utc: fields.created_utc,
            nsfw: fields.nsfw,
            subscriber_count: fields.subscriber_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Currently the same as [`Subreddit::display_name`].
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path on the remote site, e.g. `/r/rust/`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw local-time timestamp exactly as the API sent it.
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Raw UTC timestamp exactly as the API sent it.
    pub fn created_utc(&self) -> &str {
        &self.created_utc
    }

    pub fn nsfw(&self) -> bool {
        self.nsfw
    }

    pub fn subscriber_count(&self) -> u64 {
        self.subscriber_count
    }

    /// Interprets the raw `created_utc` as epoch seconds.
    ///
    /// Returns `None` when the raw value isn't numeric; the raw string is
    /// still available through [`Subreddit::created_utc`].
    pub fn created_utc_at(&self) -> Option<DateTime<Utc>> {
        let secs: f64 = self.created_utc.trim().parse().ok()?;
        if !secs.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(created_utc: &str) -> Subreddit {
        Subreddit::from_fields(SubredditFields {
            id: "2fwo".to_string(),
            display_name: "programming".to_string(),
            title: "programming".to_string(),
            description: String::new(),
            url: "/r/programming/".to_string(),
            created: "1141150769.0".to_string(),
            created_utc: created_utc.to_string(),
            nsfw: false,
            subscriber_count: 6_500_000,
        })
    }

    #[test]
    fn test_name_mirrors_display_name() {
        let sub = sample("1141150769.0");
        assert_eq!(sub.name(), "programming");
        assert_eq!(sub.name(), sub.display_name());
    }

    #[test]
    fn test_created_utc_at_parses_epoch_seconds() {
        let sub = sample("1141150769.0");
        let at = sub.created_utc_at().expect("numeric timestamp");
        assert_eq!(at.timestamp(), 1_141_150_769);
        assert_eq!(at.format("%Y-%m-%d").to_string(), "2006-02-28");
    }

    #[test]
    fn test_created_utc_at_keeps_fraction() {
        let at = sample("1141150769.25").created_utc_at().unwrap();
        assert_eq!(at.timestamp_millis(), 1_141_150_769_250);

        // Before the epoch the fraction still counts backwards
        let at = sample("-1.5").created_utc_at().unwrap();
        assert_eq!(at.timestamp_millis(), -1_500);
    }

    #[test]
    fn test_created_utc_at_rejects_non_numeric() {
        let sub = sample("yesterday");
        assert!(sub.created_utc_at().is_none());
        // Raw value is untouched
        assert_eq!(sub.created_utc(), "yesterday");
    }
}
