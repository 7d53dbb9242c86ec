// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleAuthor, NewArticle},
};
use serde_json::Value;

pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Value>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author: Option<Value>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Value) -> Self {
        self.author = Some(author);
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            content: self.content,
            author: self.author,
        }
    }
}

impl ArticleCommandService {
    /// Checks content uniqueness, then inserts. The two steps are separate
    /// round trips, so concurrent creates with equal content may both pass.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            title,
            content,
            author,
        } = command;

        // NULL content never compares equal in SQL, so there is nothing to check.
        if let Some(content) = content.as_deref() {
            if self.uniqueness.is_content_taken(content).await? {
                tracing::warn!("article creation rejected: duplicate content");
                return Err(ApplicationError::DuplicateContent);
            }
        }

        let created = self
            .repo
            .insert(NewArticle {
                title,
                content,
                author: author.map(ArticleAuthor::new),
            })
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
