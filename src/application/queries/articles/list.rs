use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, ArticleStatus},
        author::AuthorId,
        errors::DomainError,
    },
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// `limit` is ignored by [`ArticleQueryService::list_all_articles`].
#[derive(Default)]
pub struct ListArticlesQuery {
    /// State label such as `"published"`.
    pub state: Option<String>,
    pub author_id: Option<i64>,
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = self.build_filter(&query)?;
        let limit = normalize_limit(query.limit);

        let records = self.read_repo.list(filter, limit as usize).await?;
        tracing::debug!(count = records.len(), limit, "listed articles");
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Every matching article, with no page cap. Used for full exports.
    pub async fn list_all_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = self.build_filter(&query)?;
        let records = self.read_repo.list(filter, usize::MAX).await?;
        tracing::debug!(count = records.len(), "listed full catalogue");
        Ok(records.into_iter().map(Into::into).collect())
    }

    fn build_filter(&self, query: &ListArticlesQuery) -> ApplicationResult<ArticleFilter> {
        let mut filter = ArticleFilter::default();

        if let Some(label) = query.state.as_deref() {
            let status = label.parse::<ArticleStatus>().map_err(|err| match err {
                DomainError::Validation(msg) => ApplicationError::validation(msg),
                other => ApplicationError::from(other),
            })?;
            filter = filter.with_status(status);
        }

        if let Some(raw) = query.author_id {
            filter = filter.with_author(AuthorId::new(raw)?);
        }

        Ok(filter)
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
