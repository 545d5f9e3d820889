//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use orders_types::{OrderRepository, PaymentGateway};

use super::handlers::{self, AppState};
use crate::{OrderService, PayOrderUseCase};

/// HTTP Server for the Orders API.
pub struct HttpServer<R: OrderRepository, G: PaymentGateway> {
    state: Arc<AppState<R, G>>,
}

impl<R: OrderRepository, G: PaymentGateway> HttpServer<R, G> {
    /// Creates a new HTTP server over the given adapters.
    pub fn new(repo: Arc<R>, gateway: Arc<G>) -> Self {
        Self {
            state: Arc::new(AppState {
                service: OrderService::new(repo.clone()),
                pay_order: PayOrderUseCase::new(repo, gateway),
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/orders", post(handlers::create_order::<R, G>))
            .route("/api/orders/{id}", get(handlers::get_order::<R, G>))
            .route("/api/orders/{id}/lines", post(handlers::add_line::<R, G>))
            .route(
                "/api/orders/{id}/lines/{product_id}",
                delete(handlers::remove_line::<R, G>),
            )
            .route("/api/orders/{id}/pay", post(handlers::pay_order::<R, G>))
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
