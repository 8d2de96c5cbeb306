//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Explicit handle to the store-backed services.
///
/// Cloned per request by axum; clones share the same service and pool.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Public base URL override; derived from each request when `None`.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.map(Arc::from),
        }
    }

    /// Builds state directly from a repository.
    pub fn from_repository(repository: Arc<dyn LinkRepository>, base_url: Option<String>) -> Self {
        Self::new(Arc::new(LinkService::new(repository)), base_url)
    }
}
