//! Subreddit directory retrieval and normalization.

pub mod fetcher;
pub mod listing;
pub mod lookup;
pub mod normalizer;
pub mod parser;
pub mod selector;

pub use fetcher::DirectoryFetcher;
pub use listing::Listing;
pub use lookup::find_by_name;
pub use normalizer::{normalize, CoercionError};
pub use parser::parse_children;
pub use selector::{Category, Endpoint, ListingSelector};
