use crate::types::{NewUser, SearchCriteria, SortField, SortOrder, UserPatch, UserRow};
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Look up a user by handle
///
/// Soft-deleted rows are invisible by default; `include_deleted` widens the
/// lookup, preferring the active row and falling back to the newest row.
pub async fn find_by_username(
    executor: impl sqlx::PgExecutor<'_>,
    username: &str,
    include_deleted: bool,
) -> Result<Option<UserRow>, sqlx::Error> {
    let sql = if include_deleted {
        r#"
        SELECT id, username, name, avatar_url, bio, blog, location,
               public_repos, public_gists, followers, following, created_at,
               is_deleted, mirrored_at, updated_at
        FROM users
        WHERE username = $1
        ORDER BY is_deleted ASC, mirrored_at DESC
        LIMIT 1
        "#
    } else {
        r#"
        SELECT id, username, name, avatar_url, bio, blog, location,
               public_repos, public_gists, followers, following, created_at,
               is_deleted, mirrored_at, updated_at
        FROM users
        WHERE username = $1 AND NOT is_deleted
        "#
    };

    sqlx::query_as::<_, UserRow>(sql)
        .bind(username)
        .fetch_optional(executor)
        .await
}

/// Search active users by exact criteria
pub async fn find_many(
    pool: &PgPool,
    criteria: &SearchCriteria,
) -> Result<Vec<UserRow>, sqlx::Error> {
    let mut qb = QueryBuilder::<Postgres>::new(
        r#"
        SELECT id, username, name, avatar_url, bio, blog, location,
               public_repos, public_gists, followers, following, created_at,
               is_deleted, mirrored_at, updated_at
        FROM users
        WHERE NOT is_deleted
        "#,
    );

    if let Some(ref username) = criteria.username {
        qb.push(" AND username = ");
        qb.push_bind(username.clone());
    }

    if let Some(ref location) = criteria.location {
        qb.push(" AND location = ");
        qb.push_bind(location.clone());
    }

    qb.push(" ORDER BY username ASC");

    qb.build_query_as::<UserRow>().fetch_all(pool).await
}

/// Resolve a set of handles to their stored rows
///
/// Handles with no matching active row are silently dropped.
pub async fn find_by_usernames(
    executor: impl sqlx::PgExecutor<'_>,
    usernames: &[String],
) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, name, avatar_url, bio, blog, location,
               public_repos, public_gists, followers, following, created_at,
               is_deleted, mirrored_at, updated_at
        FROM users
        WHERE username = ANY($1) AND NOT is_deleted
        ORDER BY username ASC
        "#,
    )
    .bind(usernames)
    .fetch_all(executor)
    .await
}

/// Insert a newly mirrored profile
///
/// The partial unique index on active usernames rejects a duplicate of a
/// non-deleted row; that surfaces as a database error the caller maps to a
/// conflict.
pub async fn insert(
    executor: impl sqlx::PgExecutor<'_>,
    user: &NewUser,
) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, name, avatar_url, bio, blog, location,
                           public_repos, public_gists, followers, following, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, username, name, avatar_url, bio, blog, location,
                  public_repos, public_gists, followers, following, created_at,
                  is_deleted, mirrored_at, updated_at
        "#,
    )
    .bind(&user.username)
    .bind(&user.name)
    .bind(&user.avatar_url)
    .bind(&user.bio)
    .bind(&user.blog)
    .bind(&user.location)
    .bind(user.public_repos)
    .bind(user.public_gists)
    .bind(user.followers)
    .bind(user.following)
    .bind(user.created_at)
    .fetch_one(executor)
    .await
}

/// Apply a field-level update to an active user
///
/// Returns `None` when no active row matches the handle. `None` fields in
/// the patch are left untouched; `updated_at` is always bumped.
pub async fn update_fields(
    pool: &PgPool,
    username: &str,
    patch: &UserPatch,
) -> Result<Option<UserRow>, sqlx::Error> {
    let mut qb = QueryBuilder::<Postgres>::new("UPDATE users SET updated_at = NOW()");

    if let Some(ref name) = patch.name {
        qb.push(", name = ");
        qb.push_bind(name.clone());
    }
    if let Some(ref avatar_url) = patch.avatar_url {
        qb.push(", avatar_url = ");
        qb.push_bind(avatar_url.clone());
    }
    if let Some(ref bio) = patch.bio {
        qb.push(", bio = ");
        qb.push_bind(bio.clone());
    }
    if let Some(ref blog) = patch.blog {
        qb.push(", blog = ");
        qb.push_bind(blog.clone());
    }
    if let Some(ref location) = patch.location {
        qb.push(", location = ");
        qb.push_bind(location.clone());
    }
    if let Some(public_repos) = patch.public_repos {
        qb.push(", public_repos = ");
        qb.push_bind(public_repos);
    }
    if let Some(public_gists) = patch.public_gists {
        qb.push(", public_gists = ");
        qb.push_bind(public_gists);
    }
    if let Some(followers) = patch.followers {
        qb.push(", followers = ");
        qb.push_bind(followers);
    }
    if let Some(following) = patch.following {
        qb.push(", following = ");
        qb.push_bind(following);
    }

    qb.push(" WHERE username = ");
    qb.push_bind(username.to_string());
    qb.push(" AND NOT is_deleted");
    qb.push(
        r#"
        RETURNING id, username, name, avatar_url, bio, blog, location,
                  public_repos, public_gists, followers, following, created_at,
                  is_deleted, mirrored_at, updated_at
        "#,
    );

    qb.build_query_as::<UserRow>().fetch_optional(pool).await
}

/// Flag a user as deleted without removing the row
///
/// Targets the active row for the handle when one exists, otherwise the
/// newest row, so deleting an already-deleted handle still returns it.
pub async fn soft_delete(
    executor: impl sqlx::PgExecutor<'_>,
    username: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET is_deleted = TRUE, updated_at = NOW()
        WHERE id = (
            SELECT id FROM users
            WHERE username = $1
            ORDER BY is_deleted ASC, mirrored_at DESC
            LIMIT 1
        )
        RETURNING id, username, name, avatar_url, bio, blog, location,
                  public_repos, public_gists, followers, following, created_at,
                  is_deleted, mirrored_at, updated_at
        "#,
    )
    .bind(username)
    .fetch_optional(executor)
    .await
}

/// List all active users ordered by an allow-listed column
pub async fn list_sorted(
    pool: &PgPool,
    field: SortField,
    order: SortOrder,
) -> Result<Vec<UserRow>, sqlx::Error> {
    let mut qb = QueryBuilder::<Postgres>::new(
        r#"
        SELECT id, username, name, avatar_url, bio, blog, location,
               public_repos, public_gists, followers, following, created_at,
               is_deleted, mirrored_at, updated_at
        FROM users
        WHERE NOT is_deleted
        "#,
    );

    // Both identifiers come from closed enums, never from request input
    qb.push(format!(
        " ORDER BY {} {} NULLS LAST",
        field.column(),
        order.sql()
    ));

    qb.build_query_as::<UserRow>().fetch_all(pool).await
}
