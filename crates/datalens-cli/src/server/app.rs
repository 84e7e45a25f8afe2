//! Axum application setup.

use std::net::SocketAddr;

use axum::{
    http::{header::InvalidHeaderValue, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Origin value that allows every origin.
pub const ANY_ORIGIN: &str = "*";

/// Build the CORS layer. `"*"` allows any origin, anything else is taken as
/// the single allowed origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = if origin == ANY_ORIGIN {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin)?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/datasets", get(handlers::list_datasets))
        .route("/datasets/:id/suggestions", get(handlers::get_suggestions))
        .route("/datasets/:id/analyze", post(handlers::analyze_dataset));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(
    state: AppState,
    addr: SocketAddr,
    cors: CorsLayer,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state, cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
