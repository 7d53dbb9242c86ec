use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Wire shape of an article. Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    #[schema(value_type = Object)]
    pub author: Option<Value>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author: article.author.map(Value::from),
        }
    }
}

/// Outcome of listing: an empty table is reported apart from a populated one.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleListing {
    Empty,
    Articles(Vec<ArticleDto>),
}

impl ArticleListing {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        if articles.is_empty() {
            Self::Empty
        } else {
            Self::Articles(articles.into_iter().map(ArticleDto::from).collect())
        }
    }
}
