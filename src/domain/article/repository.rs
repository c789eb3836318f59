use crate::domain::article::entity::Article;
use crate::domain::article::state::ArticleStatus;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<AuthorId>,
}

impl ArticleFilter {
    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.status.is_none_or(|status| article.status() == status)
            && self.author_id.is_none_or(|id| article.author.id == id)
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Store a transient article and return it carrying its new id.
    async fn insert(&self, article: Article) -> DomainResult<Article>;
    /// Replace the stored article and return it with its revision advanced.
    ///
    /// The write only succeeds if the stored revision still equals
    /// `article.revision()`; otherwise it fails with `Conflict`.
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Newest first: `created` descending, then id descending. Pass
    /// `usize::MAX` as `limit` for no cap.
    async fn list(&self, filter: ArticleFilter, limit: usize) -> DomainResult<Vec<Article>>;
}
