use std::collections::HashSet;

use github_api::{GithubClient, UserSummary};
use sqlx::PgPool;

use crate::error::AppError;
use crate::response::UserResponse;

/// Recompute and persist the mutual-follow set for `username`
///
/// The subject must already be mirrored locally; when it is not, the lookup
/// fails before any remote call is issued. The stored adjacency is replaced
/// wholesale with the freshly computed set, restricted to handles that are
/// themselves mirrored — unmatched handles are dropped, not auto-created.
pub async fn resolve(
    pool: &PgPool,
    github: &GithubClient,
    username: &str,
) -> Result<UserResponse, AppError> {
    let subject = octomirror_db::users::find_by_username(pool, username, false)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found in mirror".into()))?;

    // Followers and following are independent; fetch both at once. Either
    // failure aborts the whole resolution.
    let (followers, following) = tokio::join!(
        github.get_followers(username),
        github.get_following(username),
    );
    let (followers, following) = (followers?, following?);

    let mutual = mutual_logins(&followers, &following);

    let matched = octomirror_db::users::find_by_usernames(pool, &mutual).await?;
    let friend_usernames: Vec<String> = matched.into_iter().map(|u| u.username).collect();

    octomirror_db::friends::replace(pool, &subject.username, &friend_usernames).await?;

    let refreshed = octomirror_db::users::find_by_username(pool, &subject.username, false)
        .await?
        .unwrap_or(subject);

    Ok(UserResponse::from_row(refreshed, friend_usernames))
}

/// Handles present in both lists, in following-list order
fn mutual_logins(followers: &[UserSummary], following: &[UserSummary]) -> Vec<String> {
    let follower_set: HashSet<&str> = followers.iter().map(|u| u.login.as_str()).collect();

    following
        .iter()
        .filter(|u| follower_set.contains(u.login.as_str()))
        .map(|u| u.login.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(logins: &[&str]) -> Vec<UserSummary> {
        logins
            .iter()
            .map(|login| UserSummary {
                login: login.to_string(),
                id: None,
                avatar_url: None,
            })
            .collect()
    }

    #[test]
    fn intersects_followers_and_following() {
        let followers = summaries(&["a", "b", "c"]);
        let following = summaries(&["b", "c", "d"]);

        let mut mutual = mutual_logins(&followers, &following);
        mutual.sort();
        assert_eq!(mutual, vec!["b", "c"]);
    }

    #[test]
    fn intersection_is_order_independent() {
        let followers = summaries(&["c", "a", "b"]);
        let following = summaries(&["d", "c", "b"]);

        let mut mutual = mutual_logins(&followers, &following);
        mutual.sort();
        assert_eq!(mutual, vec!["b", "c"]);
    }

    #[test]
    fn empty_followers_yield_no_mutuals() {
        let followers = summaries(&[]);
        let following = summaries(&["a", "b"]);

        assert!(mutual_logins(&followers, &following).is_empty());
    }

    #[test]
    fn empty_following_yields_no_mutuals() {
        let followers = summaries(&["a", "b"]);
        let following = summaries(&[]);

        assert!(mutual_logins(&followers, &following).is_empty());
    }

    #[test]
    fn disjoint_lists_yield_no_mutuals() {
        let followers = summaries(&["a", "b"]);
        let following = summaries(&["c", "d"]);

        assert!(mutual_logins(&followers, &following).is_empty());
    }

    #[test]
    fn identical_lists_are_fully_mutual() {
        let followers = summaries(&["a", "b"]);
        let following = summaries(&["a", "b"]);

        assert_eq!(mutual_logins(&followers, &following), vec!["a", "b"]);
    }
}
