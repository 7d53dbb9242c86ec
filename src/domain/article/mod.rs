pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleReplacement, NewArticle};
pub use repository::ArticleRepository;
pub use services::ContentUniquenessService;
pub use value_objects::{ArticleAuthor, ArticleId};
