// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, AuthorName};

/// Snapshot of the author embedded in an article.
///
/// The author registry lives outside this crate; an article keeps its own
/// copy, so renaming an author elsewhere does not rewrite existing articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
}

impl Author {
    pub fn new(id: AuthorId, name: AuthorName) -> Self {
        Self { id, name }
    }
}
