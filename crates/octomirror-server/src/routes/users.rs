use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use octomirror_db::types::{NewUser, SearchCriteria, SortField, SortOrder, UserPatch};

use crate::error::AppError;
use crate::friends;
use crate::response::{self, UserResponse};
use crate::state::AppState;
use crate::validation::is_valid_username;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    username: String,
}

/// POST /api/users - mirror a profile, returning the cached row when present
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if !is_valid_username(&body.username) {
        return Err(AppError::BadRequest("Invalid GitHub username".into()));
    }

    // An already-mirrored handle is served from the store, no remote call
    if let Some(existing) =
        octomirror_db::users::find_by_username(&state.pool, &body.username, false).await?
    {
        let friends = octomirror_db::friends::list(&state.pool, &existing.username).await?;
        return Ok((
            StatusCode::OK,
            Json(UserResponse::from_row(existing, friends)),
        ));
    }

    let profile = state.github.get_user(&body.username).await?;

    let Some(login) = profile.login else {
        return Err(AppError::BadRequest(
            "GitHub username is missing in the response".into(),
        ));
    };

    let new_user = NewUser {
        username: login,
        name: profile.name,
        avatar_url: profile.avatar_url,
        bio: profile.bio,
        blog: profile.blog,
        location: profile.location,
        public_repos: profile.public_repos,
        public_gists: profile.public_gists,
        followers: profile.followers,
        following: profile.following,
        created_at: profile.created_at,
    };

    let created = octomirror_db::users::insert(&state.pool, &new_user).await?;
    info!(username = %created.username, "Mirrored new profile");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_row(created, Vec::new())),
    ))
}

/// POST /api/users/{username}/friends - recompute the mutual-follow set
pub async fn resolve_friends(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = friends::resolve(&state.pool, &state.github, &username).await?;
    Ok(Json(user))
}

#[derive(Deserialize)]
pub struct SearchParams {
    username: Option<String>,
    location: Option<String>,
}

/// GET /api/users/search - exact-match search over mirrored profiles
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let criteria = SearchCriteria {
        username: params.username,
        location: params.location,
    };

    let rows = octomirror_db::users::find_many(&state.pool, &criteria).await?;
    let users = response::enrich_users(&state.pool, rows).await?;

    Ok(Json(users))
}

#[derive(Deserialize)]
pub struct SortParams {
    sort_by: Option<String>,
    order: Option<String>,
}

/// GET /api/users/sorted - listing ordered by an allow-listed column
pub async fn list_sorted(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    // The allow-list gate runs before any store access
    let field = params
        .sort_by
        .as_deref()
        .and_then(SortField::from_str)
        .ok_or_else(|| AppError::BadRequest("Invalid sort field".into()))?;

    let order = match params.order.as_deref() {
        None => SortOrder::Asc,
        Some(o) => SortOrder::from_str(o)
            .ok_or_else(|| AppError::BadRequest("Invalid sort order".into()))?,
    };

    let rows = octomirror_db::users::list_sorted(&state.pool, field, order).await?;
    let users = response::enrich_users(&state.pool, rows).await?;

    Ok(Json(users))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    name: Option<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    blog: Option<String>,
    location: Option<String>,
    public_repos: Option<i32>,
    public_gists: Option<i32>,
    followers: Option<i32>,
    following: Option<i32>,
}

/// PUT /api/users/{username} - partial update of mirrored fields
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let patch = UserPatch {
        name: body.name,
        avatar_url: body.avatar_url,
        bio: body.bio,
        blog: body.blog,
        location: body.location,
        public_repos: body.public_repos,
        public_gists: body.public_gists,
        followers: body.followers,
        following: body.following,
    };

    let updated = octomirror_db::users::update_fields(&state.pool, &username, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let friends = octomirror_db::friends::list(&state.pool, &updated.username).await?;
    Ok(Json(UserResponse::from_row(updated, friends)))
}

/// DELETE /api/users/{username} - soft delete, the row stays in storage
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let deleted = octomirror_db::users::soft_delete(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    info!(username = %deleted.username, "Soft-deleted profile");

    let friends = octomirror_db::friends::list(&state.pool, &deleted.username).await?;
    Ok(Json(UserResponse::from_row(deleted, friends)))
}
