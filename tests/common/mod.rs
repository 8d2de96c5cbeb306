#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::error::AppError;
use link_shortener::routes::{app_router, build_router};
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::generate_code;

/// In-process store with the same contract as the PostgreSQL one.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    links: Vec<Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of every stored link in insertion order.
    pub fn links(&self) -> Vec<Link> {
        self.inner.lock().unwrap().links.clone()
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.links().into_iter().find(|l| l.short_code == code)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().links.len()
    }

    /// Inserts a link directly, bypassing validation.
    pub fn seed(&self, code: &str, url: &str) -> Link {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let link = Link::new(
            inner.next_id,
            url.to_string(),
            code.to_string(),
            0,
            Utc::now(),
            None,
        );
        inner.links.push(link.clone());
        link
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.lock().unwrap();

        if inner
            .links
            .iter()
            .any(|l| l.original_url == new_link.original_url)
        {
            return Ok(None);
        }

        let code = match new_link.custom_code {
            Some(code) => {
                if inner.links.iter().any(|l| l.short_code == code) {
                    return Err(AppError::conflict("Custom code already taken"));
                }
                code
            }
            None => loop {
                let code = generate_code()?;
                if !inner.links.iter().any(|l| l.short_code == code) {
                    break code;
                }
            },
        };

        inner.next_id += 1;
        let link = Link::new(
            inner.next_id,
            new_link.original_url,
            code,
            0,
            Utc::now(),
            None,
        );
        inner.links.push(link.clone());
        Ok(Some(link))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.links.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.links.iter().find(|l| l.short_code == code).cloned())
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .links
            .iter()
            .find(|l| l.original_url == original_url)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.links();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(link) = inner.links.iter_mut().find(|l| l.short_code == code) else {
            return Ok(None);
        };

        link.clicks += 1;
        link.last_accessed = Some(Utc::now());
        Ok(Some(link.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.links.len();
        inner.links.retain(|l| l.id != id);
        Ok(inner.links.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every operation fails like an unreachable database.
pub struct FailingLinkRepository;

fn db_down() -> AppError {
    AppError::internal("Database error")
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Option<Link>, AppError> {
        Err(db_down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, AppError> {
        Err(db_down())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(db_down())
    }

    async fn find_by_original_url(&self, _original_url: &str) -> Result<Option<Link>, AppError> {
        Err(db_down())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Err(db_down())
    }

    async fn increment_clicks(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(db_down())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, AppError> {
        Err(db_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(db_down())
    }
}

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::from_repository(repo, Some(TEST_BASE_URL.to_string()))
}

pub fn create_test_app(repo: Arc<dyn LinkRepository>) -> Router {
    build_router(create_test_state(repo))
}

/// Test server over the full router, backed by a fresh in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = InMemoryLinkRepository::new();
    let server = TestServer::new(create_test_app(repo.clone())).unwrap();
    (server, repo)
}

/// Test server whose store is down.
pub fn make_failing_server() -> TestServer {
    TestServer::new(create_test_app(Arc::new(FailingLinkRepository))).unwrap()
}

/// Test server over the production service, including path normalization.
pub fn make_normalized_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = InMemoryLinkRepository::new();
    let app = app_router(create_test_state(repo.clone()));
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();
    (server, repo)
}
