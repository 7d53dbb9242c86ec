// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAuthor, ArticleId};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<ArticleAuthor>,
}

/// Fields for a row about to be inserted. Every field may be absent.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<ArticleAuthor>,
}

/// Full-row replacement used by update. All three fields are required.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleReplacement {
    pub title: String,
    pub content: String,
    pub author: ArticleAuthor,
}

pub const REQUIRED_FIELDS_MESSAGE: &str = "fields 'title', 'content' and 'author' are required";

impl ArticleReplacement {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<ArticleAuthor>,
    ) -> DomainResult<Self> {
        let title = title.filter(|t| !t.is_empty());
        let content = content.filter(|c| !c.is_empty());
        let author = author.filter(|a| !a.is_blank());

        match (title, content, author) {
            (Some(title), Some(content), Some(author)) => Ok(Self {
                title,
                content,
                author,
            }),
            _ => Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        }
    }
}

impl Article {
    pub fn apply(self, replacement: ArticleReplacement) -> Self {
        Self {
            id: self.id,
            title: Some(replacement.title),
            content: Some(replacement.content),
            author: Some(replacement.author),
        }
    }
}
