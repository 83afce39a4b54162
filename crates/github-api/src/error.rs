//! Error types for the GitHub API client

use std::fmt;

/// Errors that can occur when talking to the GitHub API
#[derive(Debug)]
pub enum GithubError {
    /// Transport failure (connect, timeout, body decode)
    Http(reqwest::Error),
    /// The API answered with a non-success status
    Status { status: u16, url: String },
}

impl fmt::Display for GithubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "GitHub HTTP error: {}", e),
            Self::Status { status, url } => {
                write!(f, "GitHub API returned {} for {}", status, url)
            }
        }
    }
}

impl std::error::Error for GithubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for GitHub API operations
pub type Result<T> = std::result::Result<T, GithubError>;
