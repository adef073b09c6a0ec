use anyhow::{bail, Result};
use std::time::Duration;

use super::session::Session;

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
const DEFAULT_USER_AGENT: &str = "subreddit_directory (https://github.com/example)";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub reddit_user_agent: String,
    pub session: Option<Session>,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("REDDIT_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!(
                "REDDIT_BASE_URL must start with http:// or https:// (got {})",
                base_url
            );
        }

        let reddit_user_agent =
            lookup("REDDIT_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let session = lookup("REDDIT_SESSION")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Session::new);

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(
                        "HTTP_TIMEOUT_SECS is set to {:?}, which is not a positive integer. Using {}s.",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            reddit_user_agent,
            session,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
