//! Askama templates and the view data they render.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::Link;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One row of the links table.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: String,
    pub last_accessed: Option<String>,
}

impl LinkView {
    pub fn from_link(link: &Link, base_url: &str) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url.clone(),
            short_code: link.short_code.clone(),
            short_url: link.short_url(base_url),
            clicks: link.clicks,
            created_at: link.created_at.format(TIMESTAMP_FORMAT).to_string(),
            last_accessed: link
                .last_accessed
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// The list page with the create form.
///
/// Renders `templates/index.html`. At most one of the two messages is set.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<LinkView>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub base_url: String,
}

impl IndexTemplate {
    pub fn new(links: &[Link], base_url: String) -> Self {
        Self {
            links: links
                .iter()
                .map(|link| LinkView::from_link(link, &base_url))
                .collect(),
            error_message: None,
            success_message: None,
            base_url,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self.success_message = None;
        self
    }

    pub fn with_success(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self.error_message = None;
        self
    }

    /// Renders the page with a non-200 status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, self).into_response()
    }
}
