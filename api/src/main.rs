//! AI Saved Me API Server
//!
//! Backend for the "AI Saved Me" success-story site: public submission
//! intake, an admin moderation workflow, and the published read boundary.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{NoopRedactor, PostgresStoryRepository};
use app::{IntakeService, ModerationService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub intake_service: Arc<IntakeService<PostgresStoryRepository, NoopRedactor>>,
    pub moderation_service: Arc<ModerationService<PostgresStoryRepository>>,
    pub story_repo: Arc<PostgresStoryRepository>,
    /// SHA-256 digest of the configured admin key
    pub admin_key_hash: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,aisavedme_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AI Saved Me API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let story_repo = Arc::new(PostgresStoryRepository::new(db.clone()));
    let redactor = Arc::new(NoopRedactor);

    // Create application services
    let intake_service = Arc::new(IntakeService::new(story_repo.clone(), redactor));
    let moderation_service = Arc::new(ModerationService::new(story_repo.clone()));

    // Create app state
    let state = AppState {
        intake_service,
        moderation_service,
        story_repo,
        admin_key_hash: auth::hash_admin_key(&config.admin_api_key),
    };

    // Rate limiting config for the public submission route: 2 req/sec
    // sustained, burst of 5, keyed by peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limit the submission intake only; the read boundary stays open
    let intake_route = post(handlers::submit_story).layer(GovernorLayer {
        config: governor_config,
    });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public boundary: published reads plus rate-limited intake
        .route("/stories", intake_route.get(handlers::list_published))
        .route("/stories/:id", get(handlers::get_story))
        // Admin moderation routes
        .nest(
            "/admin",
            Router::new()
                .route("/stories", get(handlers::list_queue))
                .route("/stories/:id", get(handlers::get_story_admin))
                .route("/stories/:id/moderate", post(handlers::moderate_story))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::admin_auth_middleware,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
