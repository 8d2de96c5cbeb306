//! Delete form handler.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::api::handlers::redirect::Found;
use crate::state::AppState;

/// Deletes a link and sends the browser back to the list.
///
/// # Endpoint
///
/// `POST /delete/{id}`
///
/// Unknown ids, including ids that are not numbers, are ignored and still
/// redirect to `/`.
///
/// # Errors
///
/// Returns 500 `Server error` (plain text) on store failures.
pub async fn delete_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        debug!(id = %id, "Ignoring delete of malformed id");
        return Found::new("/").into_response();
    };

    match state.link_service.delete_link(id).await {
        Ok(_) => Found::new("/").into_response(),
        Err(e) => {
            error!(error = %e, id, "Failed to delete link");
            e.into_response()
        }
    }
}
