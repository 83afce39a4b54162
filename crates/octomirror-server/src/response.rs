use std::collections::HashMap;

use chrono::{DateTime, Utc};
use octomirror_db::types::UserRow;
use serde::Serialize;
use sqlx::PgPool;

/// Mirrored user ready for API responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_gists: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<i32>,
    /// Upstream account creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    /// Mutual-follow handles as of the last resolution
    pub friends: Vec<String>,
    pub mirrored_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// Assemble a response from a stored row and its friends adjacency
    pub fn from_row(row: UserRow, friends: Vec<String>) -> Self {
        Self {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
            bio: row.bio,
            blog: row.blog,
            location: row.location,
            public_repos: row.public_repos,
            public_gists: row.public_gists,
            followers: row.followers,
            following: row.following,
            created_at: row.created_at,
            is_deleted: row.is_deleted,
            friends,
            mirrored_at: row.mirrored_at,
            updated_at: row.updated_at,
        }
    }
}

/// Enrich a row set with each row's friends adjacency, one query for all
pub async fn enrich_users(
    pool: &PgPool,
    rows: Vec<UserRow>,
) -> Result<Vec<UserResponse>, sqlx::Error> {
    let usernames: Vec<String> = rows.iter().map(|r| r.username.clone()).collect();
    let pairs = octomirror_db::friends::list_many(pool, &usernames).await?;

    let mut by_user: HashMap<String, Vec<String>> = HashMap::new();
    for (username, friend) in pairs {
        by_user.entry(username).or_default().push(friend);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let friends = by_user.remove(&row.username).unwrap_or_default();
            UserResponse::from_row(row, friends)
        })
        .collect())
}
