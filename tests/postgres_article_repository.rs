// tests/postgres_article_repository.rs
// Runs against a real PostgreSQL when DATABASE_URL is set; each test works in
// its own throwaway schema. Without DATABASE_URL the tests return early.
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use articles_api::domain::article::{
    ArticleAuthor, ArticleId, ArticleReplacement, ArticleRepository, NewArticle,
};
use articles_api::domain::errors::DomainError;
use articles_api::infrastructure::{database, repositories::PostgresArticleRepository};
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgConnectOptions;

static SCHEMA_SEQ: AtomicU64 = AtomicU64::new(0);

struct TestDb {
    admin: PgPool,
    pool: PgPool,
    schema: String,
}

impl TestDb {
    async fn start() -> Option<Self> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping PostgreSQL repository test");
            return None;
        };

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let schema = format!(
            "articles_test_{}_{}_{}",
            std::process::id(),
            nanos,
            SCHEMA_SEQ.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPool::connect(&url).await.expect("connect admin pool");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema");

        let options = PgConnectOptions::from_str(&url)
            .expect("parse DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = database::init_pool(options, 2).await.expect("connect pool");
        database::run_migrations(&pool).await.expect("run migrations");

        Some(Self {
            admin,
            pool,
            schema,
        })
    }

    fn repo(&self) -> PostgresArticleRepository {
        PostgresArticleRepository::new(self.pool.clone())
    }

    async fn finish(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema");
    }
}

fn new_article(title: &str, content: &str) -> NewArticle {
    NewArticle {
        title: Some(title.into()),
        content: Some(content.into()),
        author: Some(ArticleAuthor::new(json!({ "name": "Bob", "tags": ["a", 1] }))),
    }
}

#[tokio::test]
async fn insert_and_list_in_ascending_id_order() {
    let Some(db) = TestDb::start().await else {
        return;
    };
    let repo = db.repo();

    assert!(repo.list_all().await.unwrap().is_empty());

    let first = repo.insert(new_article("A", "x")).await.unwrap();
    let second = repo
        .insert(NewArticle {
            title: None,
            content: None,
            author: None,
        })
        .await
        .unwrap();
    assert!(i64::from(first.id) < i64::from(second.id));
    assert_eq!(
        first.author,
        Some(ArticleAuthor::new(json!({ "name": "Bob", "tags": ["a", 1] })))
    );
    assert_eq!(second.title, None);
    assert_eq!(second.author, None);

    let listed = repo.list_all().await.unwrap();
    assert_eq!(listed, vec![first, second]);

    db.finish().await;
}

#[tokio::test]
async fn count_by_content_counts_exact_matches() {
    let Some(db) = TestDb::start().await else {
        return;
    };
    let repo = db.repo();

    repo.insert(new_article("A", "x")).await.unwrap();
    repo.insert(new_article("B", "x")).await.unwrap();
    repo.insert(new_article("C", "y")).await.unwrap();

    assert_eq!(repo.count_by_content("x").await.unwrap(), 2);
    assert_eq!(repo.count_by_content("y").await.unwrap(), 1);
    assert_eq!(repo.count_by_content("X").await.unwrap(), 0);

    db.finish().await;
}

#[tokio::test]
async fn update_replaces_row_or_reports_not_found() {
    let Some(db) = TestDb::start().await else {
        return;
    };
    let repo = db.repo();
    let created = repo.insert(new_article("A", "x")).await.unwrap();

    let replacement = ArticleReplacement::new(
        Some("B".into()),
        Some("y".into()),
        Some(ArticleAuthor::new(json!("Alice"))),
    )
    .unwrap();
    let updated = repo
        .update_by_id(created.id, replacement.clone())
        .await
        .unwrap();
    assert_eq!(updated, created.clone().apply(replacement.clone()));

    let err = repo
        .update_by_id(ArticleId::new(i64::from(created.id) + 1000), replacement)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    db.finish().await;
}

#[tokio::test]
async fn delete_returns_snapshot_then_not_found() {
    let Some(db) = TestDb::start().await else {
        return;
    };
    let repo = db.repo();
    let created = repo.insert(new_article("A", "x")).await.unwrap();

    let deleted = repo.delete_by_id(created.id).await.unwrap();
    assert_eq!(deleted, created);
    assert!(repo.list_all().await.unwrap().is_empty());

    let err = repo.delete_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    db.finish().await;
}

#[tokio::test]
async fn unique_violation_maps_to_conflict() {
    let Some(db) = TestDb::start().await else {
        return;
    };
    let repo = db.repo();

    sqlx::query("CREATE UNIQUE INDEX articles_content_key ON articles (content)")
        .execute(&db.pool)
        .await
        .expect("create unique index");

    repo.insert(new_article("A", "x")).await.unwrap();
    let err = repo.insert(new_article("B", "x")).await.unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ref msg) if msg.contains("articles_content_key")),
        "unexpected error: {err:?}"
    );

    db.finish().await;
}
