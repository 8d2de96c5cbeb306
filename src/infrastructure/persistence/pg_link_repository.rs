//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, is_short_code_violation};
use crate::utils::code_generator::generate_code;

/// Attempts at drawing a free generated code before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 10;

const LINK_COLUMNS: &str = "id, original_url, short_code, clicks, created_at, last_accessed";

/// Row shape of the `short_links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    last_accessed: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.original_url,
            r.short_code,
            r.clicks,
            r.created_at,
            r.last_accessed,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Short code uniqueness is enforced by the `short_links_short_code_key`
/// constraint, so concurrent creates cannot both claim a code. The
/// `short_links_original_url_key` index (on `md5(original_url)`) keeps one
/// link per destination; an insert that loses that race inserts nothing.
/// Click counting is a single `UPDATE ... SET clicks = clicks + 1` statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Inserts a row; `None` when the destination is already stored.
    async fn insert(&self, original_url: &str, code: &str) -> Result<Option<Link>, sqlx::Error> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            INSERT INTO short_links (original_url, short_code)
            VALUES ($1, $2)
            ON CONFLICT ((md5(original_url))) DO NOTHING
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(original_url)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        if let Some(code) = new_link.custom_code {
            return self
                .insert(&new_link.original_url, &code)
                .await
                .map_err(|e| {
                    if is_short_code_violation(&e) {
                        AppError::conflict("Custom code already taken")
                    } else {
                        e.into()
                    }
                });
        }

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let code = generate_code()?;

            match self.insert(&new_link.original_url, &code).await {
                Ok(link) => return Ok(link),
                Err(e) if is_short_code_violation(&e) => {
                    debug!(code = %code, attempt, "Generated code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal("Failed to generate unique code"))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM short_links WHERE short_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM short_links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM short_links
            WHERE md5(original_url) = md5($1) AND original_url = $1
            "#
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM short_links ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            UPDATE short_links
            SET clicks = clicks + 1, last_accessed = NOW()
            WHERE short_code = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
