//! Libris Server - Library Catalog Management System
//!
//! Server-rendered catalog of authors, books, genres, and book copies.

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // Catalog routes (canonical URL shape: /catalog/<kind>/<id>)
    let catalog = Router::new()
        // Authors
        .route("/authors", get(api::authors::author_list))
        .route(
            "/author/create",
            get(api::authors::author_create_get).post(api::authors::author_create_post),
        )
        .route("/author/:id", get(api::authors::author_detail))
        .route(
            "/author/:id/update",
            get(api::authors::author_update_get).post(api::authors::author_update_post),
        )
        .route(
            "/author/:id/delete",
            get(api::authors::author_delete_get).post(api::authors::author_delete_post),
        )
        // Genres
        .route("/genres", get(api::genres::genre_list))
        .route(
            "/genre/create",
            get(api::genres::genre_create_get).post(api::genres::genre_create_post),
        )
        .route("/genre/:id", get(api::genres::genre_detail))
        .route(
            "/genre/:id/update",
            get(api::genres::genre_update_get).post(api::genres::genre_update_post),
        )
        .route(
            "/genre/:id/delete",
            get(api::genres::genre_delete_get).post(api::genres::genre_delete_post),
        )
        // Book instances
        .route("/bookinstances", get(api::book_instances::bookinstance_list))
        .route(
            "/bookinstance/create",
            get(api::book_instances::bookinstance_create_get)
                .post(api::book_instances::bookinstance_create_post),
        )
        .route("/bookinstance/:id", get(api::book_instances::bookinstance_detail))
        .route(
            "/bookinstance/:id/update",
            get(api::book_instances::bookinstance_update_get)
                .post(api::book_instances::bookinstance_update_post),
        )
        .route(
            "/bookinstance/:id/delete",
            get(api::book_instances::bookinstance_delete_get)
                .post(api::book_instances::bookinstance_delete_post),
        )
        .with_state(state);

    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/catalog", catalog)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
