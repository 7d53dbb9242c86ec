// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use articles_api::domain::article::{
    Article, ArticleId, ArticleReplacement, ArticleRepository, NewArticle,
};
use articles_api::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleRepository -------------------------------- */

struct Table {
    rows: BTreeMap<i64, Article>,
    next_id: i64,
}

/// Behaves like the articles table: sequential ids, ordered listing, no
/// uniqueness constraint on content.
pub struct InMemoryArticleRepository {
    table: Mutex<Table>,
    inserts: AtomicUsize,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.table.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut table = self.table.lock().unwrap();
        let id = table.next_id;
        table.next_id += 1;

        let created = Article {
            id: ArticleId::new(id),
            title: article.title,
            content: article.content,
            author: article.author,
        };
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update_by_id(
        &self,
        id: ArticleId,
        replacement: ArticleReplacement,
    ) -> DomainResult<Article> {
        let mut table = self.table.lock().unwrap();
        let row = table
            .rows
            .remove(&i64::from(id))
            .ok_or_else(DomainError::article_not_found)?;
        let updated = row.apply(replacement);
        table.rows.insert(i64::from(id), updated.clone());
        Ok(updated)
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&i64::from(id))
            .ok_or_else(DomainError::article_not_found)
    }

    async fn count_by_content(&self, content: &str) -> DomainResult<i64> {
        let table = self.table.lock().unwrap();
        let count = table
            .rows
            .values()
            .filter(|row| row.content.as_deref() == Some(content))
            .count();
        Ok(count as i64)
    }
}

/* -------------------------------- FailingArticleRepository -------------------------------- */

/// Every call fails as if the database were unreachable.
pub struct FailingArticleRepository;

pub const STORAGE_FAILURE: &str = "connection refused";

fn storage_failure<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(STORAGE_FAILURE.into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        storage_failure()
    }

    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        storage_failure()
    }

    async fn update_by_id(
        &self,
        _id: ArticleId,
        _replacement: ArticleReplacement,
    ) -> DomainResult<Article> {
        storage_failure()
    }

    async fn delete_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        storage_failure()
    }

    async fn count_by_content(&self, _content: &str) -> DomainResult<i64> {
        storage_failure()
    }
}
