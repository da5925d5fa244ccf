//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use genre_types::GenreRepository;

use super::handlers::{self, AppState};
use crate::GenreService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Genre API.
pub struct HttpServer<R: GenreRepository> {
    state: Arc<AppState<R>>,
}

impl<R: GenreRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: GenreService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/genres",
                get(handlers::list_genres::<R>).post(handlers::create_genre::<R>),
            )
            .route(
                "/genres/{slug}",
                get(handlers::get_genre::<R>)
                    .put(handlers::update_genre::<R>)
                    .delete(handlers::delete_genre::<R>),
            )
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
