pub mod config;
pub mod reddit_api;
pub mod session;
pub mod subreddit;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use reddit_api::{RedditChild, RedditListing, RedditListingData, Scalar, SubredditData};
pub use session::Session;
pub use subreddit::Subreddit;
