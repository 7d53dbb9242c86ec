use crate::domain::article::entity::{Article, ArticleReplacement, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Sole reader/writer of the articles table.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles ordered by ascending id.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Replaces every field of the row. `NotFound` when no row has `id`.
    async fn update_by_id(
        &self,
        id: ArticleId,
        replacement: ArticleReplacement,
    ) -> DomainResult<Article>;
    /// Returns the deleted row. `NotFound` when no row has `id`.
    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    async fn count_by_content(&self, content: &str) -> DomainResult<i64>;
}
