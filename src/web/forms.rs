//! Form payloads submitted from the HTML pages.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::convert::Infallible;
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::application::services::link_service::INVALID_URL_MESSAGE;
use crate::error::AppError;
use crate::utils::url_validator::is_valid_url;

/// Body of `POST /shorten`.
///
/// Missing fields deserialize as empty so that an incomplete form is reported
/// as a validation message instead of an extractor rejection. Custom code
/// rules live in [`crate::utils::code_generator::validate_custom_code`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(rename = "originalUrl", default)]
    #[validate(custom(function = "validate_original_url"))]
    pub original_url: String,

    /// Blank input is treated as "no custom code".
    #[serde(rename = "customCode", default, deserialize_with = "blank_as_none")]
    pub custom_code: Option<String>,
}

impl ShortenForm {
    /// Validates the destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `Please enter a valid URL`.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|_| AppError::bad_request(INVALID_URL_MESSAGE))
    }
}

/// `POST /shorten` body read as `application/x-www-form-urlencoded` or JSON.
///
/// Never rejects: a missing, unsupported or malformed body yields `None`,
/// which the handler reports like an invalid URL.
#[derive(Debug)]
pub struct ShortenSubmission(pub Option<ShortenForm>);

impl<S> FromRequest<S> for ShortenSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if is_json(req.headers()) {
            Json::<ShortenForm>::from_request(req, state)
                .await
                .map(|Json(form)| form)
                .map_err(|e| e.to_string())
        } else {
            Form::<ShortenForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|e| e.to_string())
        };

        match parsed {
            Ok(form) => Ok(Self(Some(form))),
            Err(reason) => {
                debug!(reason = %reason, "Unreadable shorten submission");
                Ok(Self(None))
            }
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn validate_original_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || !is_valid_url(value) {
        return Err(
            ValidationError::new("url").with_message(Cow::Borrowed(INVALID_URL_MESSAGE))
        );
    }
    Ok(())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
