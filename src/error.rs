//! Application error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Constraint guarding short code uniqueness (see `migrations/`).
pub const SHORT_CODE_CONSTRAINT: &str = "short_links_short_code_key";

/// Errors surfaced by services and handlers.
///
/// Every variant carries a user-facing message. Page handlers render
/// [`AppError::Validation`] and [`AppError::Conflict`] messages inline on the
/// list page; the plain-text endpoints fall back to [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for errors the user can fix by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Conflict(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs.
        let body = match self {
            AppError::Internal(_) => "Server error".to_string(),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(format!(
                "Unique constraint violation on {}",
                db.constraint().unwrap_or("unknown constraint")
            ));
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

/// Returns true if the error is a unique violation on the short code column.
pub fn is_short_code_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(SHORT_CODE_CONSTRAINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::conflict("Custom code already taken");
        assert_eq!(err.to_string(), "Custom code already taken");
    }

    #[test]
    fn test_user_errors() {
        assert!(AppError::bad_request("x").is_user_error());
        assert!(AppError::conflict("x").is_user_error());
        assert!(!AppError::not_found("x").is_user_error());
        assert!(!AppError::internal("x").is_user_error());
    }

    #[test]
    fn test_internal_response_hides_message() {
        let response = AppError::internal("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_non_database_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(!is_short_code_violation(&sqlx::Error::RowNotFound));
    }
}
