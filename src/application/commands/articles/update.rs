use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleAuthor, ArticleId, ArticleReplacement},
};
use serde_json::Value;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Value>,
}

impl ArticleCommandService {
    /// Full replace. Content uniqueness is not re-checked here, unlike create.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            author,
        } = command;

        let replacement = ArticleReplacement::new(title, content, author.map(ArticleAuthor::new))?;
        let id = ArticleId::new(id);

        let updated = self.repo.update_by_id(id, replacement).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(updated.into())
    }
}
