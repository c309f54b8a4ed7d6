//! Server Implementation
//!
//! HTTP 服务器组装与启动

use std::net::SocketAddr;

use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::{compose, root, route_table};
use crate::core::{Config, Result, ServerState};
use crate::middleware::logging_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and the integration tests (oneshot).
pub fn build_app(state: ServerState) -> Router {
    let images = ServeDir::new(&state.config.images_dir);

    compose(route_table(), &state)
        // Static images - missing files are plain 404
        .nest_service("/images", images)
        // Unmatched routes and unsupported methods - JSON 404
        .method_not_allowed_fallback(root::not_found)
        .fallback(root::not_found)
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // Request logging
        .layer(middleware::from_fn(logging_middleware))
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, generated before anything logs
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Connect, bind and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let state = ServerState::initialize(&self.config).await?;

        if self.config.strict_status_transitions {
            tracing::info!("Strict order status transitions enabled");
        }

        let app = build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Shop server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
