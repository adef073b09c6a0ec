use serde::Serialize;

use super::lookup::find_by_name;
use crate::models::Subreddit;

/// Subreddits from one fetch, in the order the server returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Listing {
    subreddits: Vec<Subreddit>,
}

impl Listing {
    pub fn new(subreddits: Vec<Subreddit>) -> Self {
        Self { subreddits }
    }

    pub fn len(&self) -> usize {
        self.subreddits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subreddits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subreddit> {
        self.subreddits.iter()
    }

    pub fn as_slice(&self) -> &[Subreddit] {
        &self.subreddits
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, target: &str) -> Option<&Subreddit> {
        find_by_name(&self.subreddits, target)
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Subreddit;
    type IntoIter = std::slice::Iter<'a, Subreddit>;

    fn into_iter(self) -> Self::IntoIter {
        self.subreddits.iter()
    }
}
