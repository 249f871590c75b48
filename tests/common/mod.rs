#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use shorturl::domain::entities::Link;
use shorturl::domain::repositories::LinkRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgLinkRepository;
use shorturl::routes::router;
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

/// Link repository kept in memory, allocating ids the same way the
/// PostgreSQL implementation does (1, 2, 3, ... in insertion order).
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(urls: &[&str]) -> Self {
        let links = urls
            .iter()
            .enumerate()
            .map(|(i, url)| Link::new(i as i64 + 1, url.to_string(), Utc::now()))
            .collect();

        Self {
            links: Mutex::new(links),
        }
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_short_id(&self, short_url: i64) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.short_url == short_url).cloned())
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.original_url == original_url).cloned())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }

    async fn insert(&self, original_url: &str) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if let Some(existing) = links.iter().find(|l| l.original_url == original_url) {
            return Ok(existing.clone());
        }

        let link = Link::new(links.len() as i64 + 1, original_url.to_string(), Utc::now());
        links.push(link.clone());
        Ok(link)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Link repository whose every call fails like an unreachable database.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn find_by_short_id(&self, _short_url: i64) -> Result<Option<Link>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_url(&self, _original_url: &str) -> Result<Option<Link>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert(&self, _original_url: &str) -> Result<Link, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn test_app(repo: Arc<dyn LinkRepository>) -> Router {
    router(AppState::new(repo), concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}

pub fn test_server(repo: Arc<dyn LinkRepository>) -> TestServer {
    TestServer::new(test_app(repo)).unwrap()
}

pub fn create_test_repository(pool: PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool))
}

pub async fn create_test_link(pool: &PgPool, short_url: i64, url: &str) {
    sqlx::query("INSERT INTO links (shorturl, name) VALUES ($1, $2)")
        .bind(short_url)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("UPDATE link_sequence SET last_value = GREATEST(last_value, $1)")
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}
