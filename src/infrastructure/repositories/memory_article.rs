use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Process-local article store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
    next_id: AtomicI64,
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self {
            articles: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }

    fn allocate_id(&self) -> DomainResult<ArticleId> {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        ArticleId::new(raw).map_err(|_| DomainError::Persistence("article id space exhausted".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, mut article: Article) -> DomainResult<Article> {
        if let Some(id) = article.id() {
            return Err(DomainError::Conflict(format!(
                "article {id} is already persisted"
            )));
        }

        let id = self.allocate_id()?;
        article.assign_id(id)?;

        let mut guard = self.articles.write().await;
        guard.insert(id, article.clone());
        tracing::debug!(article_id = %id, "article stored");
        Ok(article)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = article.id().ok_or_else(|| {
            DomainError::Validation("cannot update an article that was never persisted".into())
        })?;

        let mut guard = self.articles.write().await;
        let stored = guard
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;

        if stored.revision() != article.revision() {
            return Err(DomainError::Conflict(format!(
                "article {id} was modified concurrently (expected revision {}, found {})",
                article.revision(),
                stored.revision()
            )));
        }

        let mut next = article.clone();
        next.advance_revision();
        *stored = next.clone();
        tracing::debug!(article_id = %id, revision = next.revision(), "article replaced");
        Ok(next)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut guard = self.articles.write().await;
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let guard = self.articles.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn list(&self, filter: ArticleFilter, limit: usize) -> DomainResult<Vec<Article>> {
        let guard = self.articles.read().await;
        let mut matches: Vec<Article> = guard
            .values()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect();
        matches.sort_by_key(|article| Reverse((article.created(), article.raw_id())));
        matches.truncate(limit);
        Ok(matches)
    }
}
