//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link with its visit counters.
///
/// `id` is assigned by the store and only used to target deletions.
/// `clicks` and `last_accessed` change on every successful redirect;
/// everything else is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        last_accessed: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks,
            created_at,
            last_accessed,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn was_visited(&self) -> bool {
        self.last_accessed.is_some()
    }

    /// Builds the public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.short_code)
    }
}

/// Input data for creating a new link.
///
/// When `custom_code` is `None` the store generates an 8-character code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub custom_code: Option<String>,
}

impl NewLink {
    pub fn new(original_url: impl Into<String>, custom_code: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "abc12345".to_string(),
            0,
            now,
            None,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "abc12345");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(!link.was_visited());
    }

    #[test]
    fn test_link_was_visited() {
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "visited1".to_string(),
            3,
            Utc::now(),
            Some(Utc::now()),
        );
        assert!(link.was_visited());
    }

    #[test]
    fn test_short_url_joins_base() {
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "xyz789ab".to_string(),
            0,
            Utc::now(),
            None,
        );

        assert_eq!(
            link.short_url("http://localhost:3000"),
            "http://localhost:3000/xyz789ab"
        );
        assert_eq!(
            link.short_url("https://s.example.com/"),
            "https://s.example.com/xyz789ab"
        );
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("https://rust-lang.org", Some("rusty".to_string()));

        assert_eq!(new_link.original_url, "https://rust-lang.org");
        assert_eq!(new_link.custom_code.as_deref(), Some("rusty"));
    }
}
