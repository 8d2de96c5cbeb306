//! Link creation, listing, resolution and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;
use crate::utils::url_validator::is_valid_url;

/// Message shown when the submitted URL is missing or malformed.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Message shown when a custom code is already in use.
pub const CODE_TAKEN_MESSAGE: &str = "Custom code already taken";

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new link was stored.
    Created(Link),
    /// The destination was already shortened; nothing was stored.
    Existing(Link),
}

impl ShortenOutcome {
    pub fn link(&self) -> &Link {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and resolving shortened links.
///
/// Holds the store handle explicitly; handlers reach it through
/// [`crate::state::AppState`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Returns every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Shortens `original_url`, optionally under a caller-chosen code.
    ///
    /// Checks run in this order, and none of the failing ones mutate the
    /// store:
    ///
    /// 1. the URL must be non-empty and parse with an `http`/`https` scheme
    /// 2. a custom code must be well-formed and not reserved
    /// 3. a custom code must not be taken
    /// 4. if the URL already has a link, that link is returned as
    ///    [`ShortenOutcome::Existing`], also when another request stores it
    ///    between the lookup and the insert
    ///
    /// Blank custom codes count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad URL or malformed code,
    /// [`AppError::Conflict`] for a taken code, and [`AppError::Internal`] on
    /// store errors.
    pub async fn shorten(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortenOutcome, AppError> {
        let original_url = original_url.trim();
        if original_url.is_empty() || !is_valid_url(original_url) {
            return Err(AppError::bad_request(INVALID_URL_MESSAGE));
        }

        let custom_code = custom_code.map(str::trim).filter(|c| !c.is_empty());

        if let Some(code) = custom_code {
            validate_custom_code(code)?;

            if self.link_repository.find_by_code(code).await?.is_some() {
                return Err(AppError::conflict(CODE_TAKEN_MESSAGE));
            }
        }

        if let Some(existing) = self
            .link_repository
            .find_by_original_url(original_url)
            .await?
        {
            tracing::debug!(code = %existing.short_code, "URL already shortened");
            return Ok(ShortenOutcome::Existing(existing));
        }

        let new_link = NewLink::new(original_url, custom_code.map(str::to_string));
        let Some(link) = self.link_repository.create(new_link).await? else {
            // A concurrent request stored the same URL between lookup and insert.
            let existing = self
                .link_repository
                .find_by_original_url(original_url)
                .await?
                .ok_or_else(|| AppError::internal("Link missing after conflicting insert"))?;

            tracing::debug!(code = %existing.short_code, "URL shortened concurrently");
            return Ok(ShortenOutcome::Existing(existing));
        };

        tracing::info!(code = %link.short_code, id = link.id, "Short link created");
        Ok(ShortenOutcome::Created(link))
    }

    /// Looks up a single link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn find_link(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_id(id).await
    }

    /// Resolves a code for a redirect, counting the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code (nothing is
    /// mutated) and [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Deletes a link by id. Deleting an unknown id is not an error.
    ///
    /// Returns whether a link was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_link(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.link_repository.delete_by_id(id).await?;
        if !deleted {
            tracing::debug!(id, "Delete of unknown link id ignored");
        }
        Ok(deleted)
    }

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
