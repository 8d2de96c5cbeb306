//! Create form handler.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::Response,
};
use tracing::error;

use crate::application::services::ShortenOutcome;
use crate::application::services::link_service::INVALID_URL_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;
use crate::web::forms::ShortenSubmission;
use crate::web::handlers::index::{PageMessage, render_with_message};

/// Generic message for unexpected failures.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Shortens the submitted URL and re-renders the list.
///
/// # Endpoint
///
/// `POST /shorten` with fields `originalUrl` and optional `customCode`, sent
/// as a urlencoded form or as JSON.
///
/// # Outcomes
///
/// - invalid URL or custom code, or an unreadable body: error message,
///   nothing stored
/// - custom code taken: `Custom code already taken`, nothing stored
/// - URL already shortened: success message with the existing short link
/// - otherwise: success message with the new short link
///
/// Store failures render `Server error` with status 500.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    ShortenSubmission(form): ShortenSubmission,
) -> Response {
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers, &uri);

    let result = match form {
        Some(form) => match form.check() {
            Ok(()) => {
                state
                    .link_service
                    .shorten(&form.original_url, form.custom_code.as_deref())
                    .await
            }
            Err(e) => Err(e),
        },
        None => Err(AppError::bad_request(INVALID_URL_MESSAGE)),
    };

    let (status, message) = match result {
        Ok(ShortenOutcome::Created(link)) => (
            StatusCode::OK,
            PageMessage::Success(format!("Short URL created: {}", link.short_url(&base_url))),
        ),
        Ok(ShortenOutcome::Existing(link)) => (
            StatusCode::OK,
            PageMessage::Success(format!(
                "URL already shortened: {}",
                link.short_url(&base_url)
            )),
        ),
        Err(e) if e.is_user_error() => (StatusCode::OK, PageMessage::Error(e.to_string())),
        Err(e) => {
            error!(error = %e, "Failed to shorten URL");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                PageMessage::Error(SERVER_ERROR_MESSAGE.to_string()),
            )
        }
    };

    render_with_message(&state, base_url, status, message, SERVER_ERROR_MESSAGE).await
}
