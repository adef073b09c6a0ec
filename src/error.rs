use thiserror::Error;

/// Failures of the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GET {url} -> HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} -> not found")]
    NotFound { url: String },

    #[error("GET {url} returned a body that is not JSON: {reason}")]
    UnparsableBody { url: String, reason: String },
}

/// Everything a directory fetch can fail with.
///
/// A lookup that finds nothing is not an error; see [`crate::directory::find_by_name`].
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Transport(TransportError),

    /// The response could not be read as a JSON object. For `about.json`
    /// this is how a missing subreddit shows up, but other causes can't be
    /// ruled out.
    #[error("{url}: subreddit not found or response unparsable ({reason})")]
    NotFoundOrUnparsable { url: String, reason: String },

    #[error("{}", describe_coercion(.field, .index, .reason))]
    FieldCoercion {
        field: &'static str,
        index: Option<usize>,
        reason: String,
    },

    #[error("invalid subreddit or category name: {name:?}")]
    InvalidName { name: String },
}

fn describe_coercion(field: &str, index: &Option<usize>, reason: &str) -> String {
    match index {
        Some(i) => format!("field `{}` of child {}: {}", field, i, reason),
        None => format!("field `{}`: {}", field, reason),
    }
}

impl From<TransportError> for DirectoryError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NotFound { url } => Self::NotFoundOrUnparsable {
                url,
                reason: "HTTP 404".to_string(),
            },
            TransportError::UnparsableBody { url, reason } => {
                Self::NotFoundOrUnparsable { url, reason }
            }
            other => Self::Transport(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
