// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListing},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleIdPath, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use utoipa::ToSchema;

pub const NO_ARTICLES_MESSAGE: &str = "no articles found";
pub const ARTICLE_DELETED_MESSAGE: &str = "article deleted successfully";

/// Body accepted by create and update. Missing keys deserialize as `None`;
/// numeric and boolean `title`/`content` are stored as their text form.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ArticleRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub content: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub author: Option<Value>,
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text, number or boolean, got {other}"
        ))),
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteArticleResponse {
    pub message: String,
    pub article: ArticleDto,
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All articles, ascending id.", body = [ArticleDto]),
        (status = 404, description = "No articles exist.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let listing = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http_context("failed to fetch articles")?;

    match listing {
        ArticleListing::Articles(items) => Ok(Json(items)),
        ArticleListing::Empty => Err(HttpError::not_found(NO_ARTICLES_MESSAGE)),
    }
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Duplicate content or storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http_context("failed to create article")?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "A required field is missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http_context("failed to update article")
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = DeleteArticleResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<DeleteArticleResponse>> {
    let article = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http_context("failed to delete article")?;

    Ok(Json(DeleteArticleResponse {
        message: ARTICLE_DELETED_MESSAGE.into(),
        article,
    }))
}
