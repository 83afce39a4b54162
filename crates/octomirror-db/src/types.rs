use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row returned from SELECT queries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub public_repos: Option<i32>,
    pub public_gists: Option<i32>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
    /// Upstream account creation time, distinct from the local row timestamps
    pub created_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub mirrored_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a newly mirrored profile
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub public_repos: Option<i32>,
    pub public_gists: Option<i32>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Field-level update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub public_repos: Option<i32>,
    pub public_gists: Option<i32>,
    pub followers: Option<i32>,
    pub following: Option<i32>,
}

/// Filter criteria for user search; every present field is an exact match
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub username: Option<String>,
    pub location: Option<String>,
}

/// Columns the sorted listing may order by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PublicRepos,
    PublicGists,
    Followers,
    Following,
    CreatedAt,
}

impl SortField {
    /// Parse an API sort key; anything outside the allow-list is rejected
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "public_repos" => Some(Self::PublicRepos),
            "public_gists" => Some(Self::PublicGists),
            "followers" => Some(Self::Followers),
            "following" => Some(Self::Following),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Column name used in ORDER BY
    pub fn column(self) -> &'static str {
        match self {
            Self::PublicRepos => "public_repos",
            Self::PublicGists => "public_gists",
            Self::Followers => "followers",
            Self::Following => "following",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction for the sorted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_accepts_allow_listed_keys() {
        assert_eq!(
            SortField::from_str("public_repos"),
            Some(SortField::PublicRepos)
        );
        assert_eq!(
            SortField::from_str("public_gists"),
            Some(SortField::PublicGists)
        );
        assert_eq!(SortField::from_str("followers"), Some(SortField::Followers));
        assert_eq!(SortField::from_str("following"), Some(SortField::Following));
        assert_eq!(SortField::from_str("created_at"), Some(SortField::CreatedAt));
    }

    #[test]
    fn sort_field_rejects_unknown_keys() {
        assert_eq!(SortField::from_str("made_up_field"), None);
        assert_eq!(SortField::from_str(""), None);
        assert_eq!(SortField::from_str("username"), None);
        // Column names are matched exactly, not case-insensitively
        assert_eq!(SortField::from_str("Followers"), None);
    }

    #[test]
    fn sort_field_maps_to_columns() {
        assert_eq!(SortField::PublicRepos.column(), "public_repos");
        assert_eq!(SortField::CreatedAt.column(), "created_at");
    }

    #[test]
    fn sort_order_parses_and_defaults_nothing_else() {
        assert_eq!(SortOrder::from_str("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::from_str("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_str("sideways"), None);
    }
}
