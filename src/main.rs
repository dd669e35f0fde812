use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod discover;
mod services;

use config::AppConfig;
use discover::quiz::Quiz;
use discover::selection::Selection;
use services::tmdb::{PosterCard, TmdbClient};

/// Shared view state: the current filter selection, the poster list it
/// produced, and the quiz in progress (if any). Nothing here is persisted.
pub struct AppState {
    pub tmdb: TmdbClient,
    pub selection: RwLock<Selection>,
    pub posters: RwLock<Vec<PosterCard>>,
    pub quiz: RwLock<Option<Quiz>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelpick=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    config.log_config();

    let tmdb = TmdbClient::new(config.tmdb_token.clone().unwrap_or_default());

    let state = Arc::new(AppState {
        tmdb,
        selection: RwLock::new(Selection::default()),
        posters: RwLock::new(Vec::new()),
        quiz: RwLock::new(None),
    });

    // Warm the result list for the default selection; until this lands the
    // feed is simply empty
    {
        let warm_state = state.clone();
        tokio::spawn(async move {
            api::results::refresh_results(&warm_state).await;
        });
    }

    // Root handler
    async fn root_handler() -> &'static str {
        "Reelpick Discovery Server"
    }

    // Build router
    let app = Router::new()
        .route("/", get(root_handler).head(root_handler))
        .route("/health", get(|| async { "OK" }))
        .nest("/", api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Create shutdown signal listener
    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
            _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
        }
    };

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
