pub mod directory;
pub mod error;
pub mod models;
pub mod transport;

pub use directory::{Category, DirectoryFetcher, Listing, ListingSelector};
pub use error::{DirectoryError, TransportError};
pub use models::{Session, Subreddit};
