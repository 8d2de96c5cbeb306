//! List page handler.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;
use crate::web::templates::IndexTemplate;

/// Message shown when the link list cannot be read.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading URLs";

/// Renders every link, newest first, with the create form.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// A store failure renders the page with an empty list, the message
/// `Error loading URLs` and status 500.
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers, &uri);

    match state.link_service.list_links().await {
        Ok(links) => IndexTemplate::new(&links, base_url).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load links");
            IndexTemplate::new(&[], base_url)
                .with_error(LOAD_ERROR_MESSAGE)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Re-reads the list and renders it under a message.
///
/// Used after form submissions. If the list itself cannot be read the page
/// degrades to an empty list with `fallback_error` and status 500.
pub(crate) async fn render_with_message(
    state: &AppState,
    base_url: String,
    status: StatusCode,
    message: PageMessage,
    fallback_error: &str,
) -> Response {
    let links = match state.link_service.list_links().await {
        Ok(links) => links,
        Err(e) => {
            error!(error = %e, "Failed to reload links");
            return IndexTemplate::new(&[], base_url)
                .with_error(fallback_error)
                .with_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let page = IndexTemplate::new(&links, base_url);
    let page = match message {
        PageMessage::Error(m) => page.with_error(m),
        PageMessage::Success(m) => page.with_success(m),
    };

    page.with_status(status)
}

/// Banner shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageMessage {
    Error(String),
    Success(String),
}
