use crate::models::Subreddit;

/// Return the first subreddit whose display name equals `target`, ignoring case.
///
/// `None` is the ordinary "not in this listing" answer.
pub fn find_by_name<'a>(subreddits: &'a [Subreddit], target: &str) -> Option<&'a Subreddit> {
    subreddits
        .iter()
        .find(|sub| eq_ignore_case(sub.display_name(), target))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
