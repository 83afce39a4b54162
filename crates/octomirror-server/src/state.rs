use std::sync::Arc;

use github_api::GithubClient;
use sqlx::postgres::PgPool;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub github: Arc<GithubClient>,
}
