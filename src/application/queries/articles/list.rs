use super::ArticleQueryService;
use crate::application::{dto::ArticleListing, error::ApplicationResult};

/// Lists every article. Carries no parameters: there is no paging or filtering.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<ArticleListing> {
        let articles = self.repo.list_all().await?;
        tracing::debug!(count = articles.len(), "articles listed");
        Ok(ArticleListing::from_articles(articles))
    }
}
