//! Data types for GitHub API responses
//!
//! These structs mirror the subset of the GitHub user payloads the mirror
//! persists. Fields are optional wherever the API may return null.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Profile from the `GET /users/{username}` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    /// Canonical username; absent in malformed responses, which callers
    /// must treat as an invalid profile rather than a transport error
    pub login: Option<String>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub public_repos: Option<i32>,
    pub public_gists: Option<i32>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
    /// Upstream account creation time
    pub created_at: Option<DateTime<Utc>>,
}

/// List item from the followers / following endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub login: String,
    pub id: Option<u64>,
    pub avatar_url: Option<String>,
}
