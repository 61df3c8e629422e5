//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The myth API and health probe live under a permissive CORS layer so the
//! sky page can be hosted elsewhere during development. Everything else falls
//! through to the static `public/` directory, which holds the page and the
//! compiled sky wasm bundle.

pub mod myth;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/myth", get(myth::get_myth))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus static hosting of `public/`.
pub fn app(state: AppState) -> Router {
    let public = ServeDir::new(&state.config.public_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
