// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleId, ArticleReplacement, ArticleRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

/// Persistence gateway over the `articles` table. Holds a cloned handle to the
/// process-wide pool; each call acquires and releases its own connection.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// `id` is cast to BIGINT so tables created with SERIAL (int4) decode into i64.
#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: Option<String>,
    content: Option<String>,
    author: Option<Value>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId::new(row.id),
            title: row.title,
            content: row.content,
            author: row.author.map(ArticleAuthor::new),
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id::BIGINT AS id, title, content, author FROM articles ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, author)
             VALUES ($1, $2, $3)
             RETURNING id::BIGINT AS id, title, content, author",
        )
        .bind(title)
        .bind(content)
        .bind(author.map(Value::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update_by_id(
        &self,
        id: ArticleId,
        replacement: ArticleReplacement,
    ) -> DomainResult<Article> {
        let ArticleReplacement {
            title,
            content,
            author,
        } = replacement;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $2, content = $3, author = $4
             WHERE id = $1
             RETURNING id::BIGINT AS id, title, content, author",
        )
        .bind(i64::from(id))
        .bind(title)
        .bind(content)
        .bind(Value::from(author))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        maybe_row
            .map(Article::from)
            .ok_or_else(DomainError::article_not_found)
    }

    async fn delete_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "DELETE FROM articles WHERE id = $1
             RETURNING id::BIGINT AS id, title, content, author",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        maybe_row
            .map(Article::from)
            .ok_or_else(DomainError::article_not_found)
    }

    async fn count_by_content(&self, content: &str) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM articles WHERE content = $1")
            .bind(content)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
