//! Application startup and lifecycle management.

use crate::config::{BfhlConfig, GeminiSettings};
use crate::handlers::{bfhl, health_check, metrics};
use crate::services::{AnswerProvider, Dispatcher, GeminiConfig, GeminiProvider, MockAnswerProvider};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_trace_layer, metrics_middleware, request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: BfhlConfig, provider: Arc<dyn AnswerProvider>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(provider),
        }
    }
}

/// Pick the answer provider for the configured credentials.
///
/// Without an API key the service still starts, but every `AI` request fails.
pub fn answer_provider(settings: &GeminiSettings) -> Result<Arc<dyn AnswerProvider>, AppError> {
    match &settings.api_key {
        Some(api_key) => {
            let provider = GeminiProvider::new(GeminiConfig {
                api_key: api_key.clone(),
                model: settings.model.clone(),
                api_base: settings.api_base.clone(),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Gemini provider: {}", e)))?;

            tracing::info!(model = %settings.model, "Initialized Gemini answer provider");
            Ok(Arc::new(provider))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, AI requests will fail");
            Ok(Arc::new(MockAnswerProvider::new(false)))
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/bfhl", post(bfhl))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the provider selected from configuration.
    pub async fn build(config: BfhlConfig) -> Result<Self, AppError> {
        let provider = answer_provider(&config.gemini)?;
        Self::build_with_provider(config, provider).await
    }

    pub async fn build_with_provider(
        config: BfhlConfig,
        provider: Arc<dyn AnswerProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("bfhl-service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT or SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
