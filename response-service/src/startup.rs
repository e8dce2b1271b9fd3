//! Application startup and lifecycle management.

use crate::config::{AppConfig, ProviderKind};
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::TextProvider;
use crate::services::ResponseDb;
use axum::{
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: ResponseDb,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Build the application, selecting the text provider from configuration.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> = match config.provider.kind {
            ProviderKind::Gemini => Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.provider.text_model.clone(),
            })),
            ProviderKind::Mock => Arc::new(MockTextProvider::new(true)),
        };

        tracing::info!(
            kind = ?config.provider.kind,
            model = %config.provider.text_model,
            "Initialized text provider"
        );

        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application with an explicitly injected text provider.
    pub async fn build_with_provider(
        config: AppConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let db = ResponseDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let state = AppState {
            db: db.clone(),
            text_provider,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/api/generate", post(handlers::generate_response))
            .route("/api/responses", get(handlers::list_responses))
            .route(
                "/api/responses/:id",
                get(handlers::get_response)
                    .put(handlers::update_response)
                    .delete(handlers::delete_response),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state.clone());

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &ResponseDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
