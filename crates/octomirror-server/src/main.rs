mod config;
mod error;
mod friends;
mod response;
mod routes;
mod state;
mod validation;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use github_api::GithubClient;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "octomirror_server=info".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    info!(port = config.port, "Starting octomirror-server");

    // Connect to database
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    octomirror_db::migrate::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        pool,
        github: Arc::new(GithubClient::with_base_url(&config.github_api_url)),
    };

    // CORS
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health))
        // Users - specific routes before the parameterized ones
        .route("/api/users", post(routes::users::create_user))
        .route("/api/users/search", get(routes::users::search_users))
        .route("/api/users/sorted", get(routes::users::list_sorted))
        .route(
            "/api/users/{username}",
            put(routes::users::update_user).delete(routes::users::delete_user),
        )
        .route(
            "/api/users/{username}/friends",
            post(routes::users::resolve_friends),
        )
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}
