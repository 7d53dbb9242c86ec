// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleRepository, ContentUniquenessService};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) uniqueness: Arc<ContentUniquenessService>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        uniqueness: Arc<ContentUniquenessService>,
    ) -> Self {
        Self { repo, uniqueness }
    }
}
