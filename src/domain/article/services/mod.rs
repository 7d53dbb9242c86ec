// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::article::repository::ArticleRepository;
use crate::domain::errors::DomainResult;

/// Domain service answering whether a content value is already in use.
pub struct ContentUniquenessService {
    repo: Arc<dyn ArticleRepository>,
}

impl ContentUniquenessService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    /// Read-only. Not atomic with a later insert: two concurrent callers can
    /// both observe `false` for the same content.
    pub async fn is_content_taken(&self, content: &str) -> DomainResult<bool> {
        let count = self.repo.count_by_content(content).await?;
        Ok(count > 0)
    }
}
