pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    routing::{delete, get, post},
    Router,
};
use flashcard_core::CardStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::SessionRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<CardStore>>,
    pub sessions: Arc<SessionRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(CardStore::new())),
            sessions: Arc::new(SessionRegistry::new()),
            config: Arc::new(config),
        }
    }

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, CardStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("card store lock poisoned".to_string()))
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, CardStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("card store lock poisoned".to_string()))
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Card routes
        .route("/api/categories", get(routes::cards::categories))
        .route("/api/cards", get(routes::cards::list).post(routes::cards::add))
        .route("/api/cards/{id}", get(routes::cards::get))
        // Session routes
        .route("/api/sessions", post(routes::sessions::create))
        .route("/api/sessions/{id}", delete(routes::sessions::delete))
        .route("/api/sessions/{id}/shuffle", post(routes::sessions::toggle_shuffle))
        // Review routes
        .route("/api/sessions/{id}/review/advance", post(routes::review::advance))
        .route("/api/sessions/{id}/review/flip", post(routes::review::flip))
        .route("/api/sessions/{id}/review/mark", post(routes::review::mark))
        // Quiz routes
        .route("/api/sessions/{id}/quiz", get(routes::quiz::progress))
        .route("/api/sessions/{id}/quiz/start", post(routes::quiz::start))
        .route("/api/sessions/{id}/quiz/answer", post(routes::quiz::answer))
        // Theme
        .route("/api/theme/toggle", post(routes::theme::toggle))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
