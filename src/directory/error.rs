use std::fmt;
use thiserror::Error;

/// Transport level error of the remote collection.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("id cannot be changed while editing user {0}")]
    IdLocked(i64),
}

/// What the user is told when an operation fails. The cause is not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Fetch,
    Save,
    Delete,
    Validation,
}

impl Failure {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch users.",
            Self::Save => "Failed to save user.",
            Self::Delete => "Failed to delete user.",
            Self::Validation => "Please enter all data.",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Failure {}
