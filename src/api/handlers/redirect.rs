//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// `302 Found` response with a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    location: String,
}

impl Found {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        match HeaderValue::try_from(self.location) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(e) => {
                error!(error = %e, "Redirect target is not a valid header value");
                AppError::internal("Invalid redirect location").into_response()
            }
        }
    }
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The visit is counted before redirecting: `clicks` goes up by one and
/// `last_accessed` is set to now, in a single store operation.
///
/// # Errors
///
/// Returns 404 `URL not found` (plain text) for an unknown code; nothing is
/// mutated. Returns 500 `Server error` on store failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Found, AppError> {
    let link = state.link_service.resolve(&code).await.inspect_err(|e| {
        if let AppError::Internal(_) = e {
            error!(error = %e, code = %code, "Failed to resolve short code");
        }
    })?;

    debug!(code = %code, clicks = link.clicks, "Redirecting");
    Ok(Found::new(link.original_url))
}
