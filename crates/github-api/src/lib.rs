//! Rust client for the read-only GitHub users REST API
//!
//! Provides the three profile endpoints needed to mirror GitHub accounts
//! locally: a single user profile, plus the first page of its followers and
//! following lists.
//!
//! # Example
//!
//! ```no_run
//! use github_api::GithubClient;
//!
//! # async fn example() -> Result<(), github_api::GithubError> {
//! let client = GithubClient::new();
//!
//! let profile = client.get_user("octocat").await?;
//! println!("{:?}", profile.name);
//!
//! let followers = client.get_followers("octocat").await?;
//! for user in followers {
//!     println!("{}", user.login);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /users/{username}` - Profile lookup
//! - `GET /users/{username}/followers` - First page of followers
//! - `GET /users/{username}/following` - First page of following
//!
//! Pagination is deliberately not handled; callers get whatever the API
//! returns under its default page size.

mod client;
mod error;
mod types;

pub use client::GithubClient;
pub use error::{GithubError, Result};
pub use types::{GithubUser, UserSummary};
