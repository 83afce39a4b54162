//! GitHub REST API HTTP client

use std::time::Duration;

use crate::error::{GithubError, Result};
use crate::types::{GithubUser, UserSummary};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "octomirror/0.1";

/// Client for the read-only GitHub users API
///
/// Each method issues a single GET; list endpoints return only the first
/// page as served by the API.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom API root
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        // GitHub rejects requests that carry no User-Agent header
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a single user profile
    ///
    /// # Arguments
    /// * `username` - The GitHub username to look up
    pub async fn get_user(&self, username: &str) -> Result<GithubUser> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(username));
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GithubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the first page of users following `username`
    pub async fn get_followers(&self, username: &str) -> Result<Vec<UserSummary>> {
        self.get_user_list(username, "followers").await
    }

    /// Fetch the first page of users that `username` follows
    pub async fn get_following(&self, username: &str) -> Result<Vec<UserSummary>> {
        self.get_user_list(username, "following").await
    }

    async fn get_user_list(&self, username: &str, segment: &str) -> Result<Vec<UserSummary>> {
        let url = format!(
            "{}/users/{}/{}",
            self.base_url,
            urlencoding::encode(username),
            segment
        );
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GithubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}
