//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - List of links (HTML)
//! - `POST /shorten`     - Create a short link (HTML)
//! - `POST /delete/{id}` - Delete a link, redirect to `/`
//! - `GET  /health`      - Health check (JSON)
//! - `/static/*`         - Static assets
//! - `GET  /{code}`      - Short link redirect
//!
//! Static routes take precedence over `/{code}`, which is why the matching
//! path segments are reserved as custom codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Routes and request tracing, without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(tracing::layer())
}
