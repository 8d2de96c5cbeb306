//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{delete_handler, index_handler, shorten_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Routes behind the HTML pages.
///
/// # Endpoints
///
/// - `GET  /`            - List of links with the create form
/// - `POST /shorten`     - Create a short link, re-render the list
/// - `POST /delete/{id}` - Delete a link, redirect to `/`
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/delete/{id}", post(delete_handler))
}
