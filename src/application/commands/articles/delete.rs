use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Returns a snapshot of the row as it was before deletion.
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id);
        let deleted = self.repo.delete_by_id(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(deleted.into())
    }
}
