use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// A named subreddit category, e.g. `/reddits/popular.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Popular,
    Banned,
    New,
    /// Any other category string the API accepts.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Popular => "popular",
            Self::Banned => "banned",
            Self::New => "new",
            Self::Other(s) => s,
        }
    }
}

impl FromStr for Category {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s {
            "popular" => Self::Popular,
            "banned" => Self::Banned,
            "new" => Self::New,
            other => Self::Other(other.to_string()),
        };
        validate_segment(category.as_str())?;
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which listing endpoint to query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingSelector {
    /// Subreddits making up the default front page.
    #[default]
    Default,
    Category(Category),
}

/// Every endpoint the directory layer talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Listing(&'a ListingSelector),
    About(&'a str),
}

impl Endpoint<'_> {
    /// Absolute URL for this endpoint under `base_url` (no trailing slash).
    pub fn url(&self, base_url: &str) -> Result<String, DirectoryError> {
        match self {
            Self::Listing(ListingSelector::Default) => Ok(format!("{}/reddits.json", base_url)),
            Self::Listing(ListingSelector::Category(category)) => {
                validate_segment(category.as_str())?;
                Ok(format!("{}/reddits/{}.json", base_url, category))
            }
            Self::About(name) => {
                validate_segment(name)?;
                Ok(format!("{}/r/{}/about.json", base_url, name))
            }
        }
    }
}

/// Names and categories are spliced into URL paths, so only plain
/// identifiers are allowed.
pub fn validate_segment(segment: &str) -> Result<(), DirectoryError> {
    let valid = !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(DirectoryError::InvalidName {
            name: segment.to_string(),
        })
    }
}
