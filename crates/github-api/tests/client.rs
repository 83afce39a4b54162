use github_api::{GithubClient, GithubError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_user_decodes_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": null,
            "blog": "https://github.blog",
            "location": "San Francisco",
            "public_repos": 8,
            "public_gists": 8,
            "followers": 9999,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        })))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let user = client.get_user("octocat").await.unwrap();

    assert_eq!(user.login.as_deref(), Some("octocat"));
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.bio, None);
    assert_eq!(user.location.as_deref(), Some("San Francisco"));
    assert_eq!(user.public_repos, Some(8));
    assert_eq!(user.followers, Some(9999));
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn get_user_tolerates_missing_login() {
    let mock_server = MockServer::start().await;

    // A degenerate payload without the canonical name still decodes; the
    // caller decides how to treat the absent login.
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Ghost"
        })))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let user = client.get_user("ghost").await.unwrap();

    assert_eq!(user.login, None);
    assert_eq!(user.name.as_deref(), Some("Ghost"));
}

#[tokio::test]
async fn get_user_surfaces_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let err = client.get_user("nobody").await.unwrap_err();

    match err {
        GithubError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_followers_returns_logins_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "alice", "id": 1 },
            { "login": "bob", "id": 2 },
            { "login": "carol", "id": 3 }
        ])))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let followers = client.get_followers("octocat").await.unwrap();

    let logins: Vec<&str> = followers.iter().map(|u| u.login.as_str()).collect();
    assert_eq!(logins, vec!["alice", "bob", "carol"]);
}

#[tokio::test]
async fn get_following_handles_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/loner/following"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let following = client.get_following("loner").await.unwrap();

    assert!(following.is_empty());
}

#[tokio::test]
async fn get_followers_surfaces_rate_limit_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/busy/followers"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded"
        })))
        .mount(&mock_server)
        .await;

    let client = GithubClient::with_base_url(&mock_server.uri());
    let err = client.get_followers("busy").await.unwrap_err();

    match err {
        GithubError::Status { status, .. } => assert_eq!(status, 403),
        other => panic!("expected Status error, got {other:?}"),
    }
}
