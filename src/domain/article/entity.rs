// src/domain/article/entity.rs
use crate::domain::article::state::{ArticleState, ArticleStatus, ArticleTransition};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, CoverImage, MarkdownContent};
use crate::domain::author::Author;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// A single piece of written content and its metadata.
///
/// `id` is `None` until a repository stores the article; only
/// [`Article::assign_id`] sets it. `created` is fixed at construction.
/// `revision` counts stored writes and guards against lost updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub markdown_content: MarkdownContent,
    pub cover_image: Option<CoverImage>,
    created: DateTime<Utc>,
    pub author: Author,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    revision: u64,
}

impl Article {
    pub fn draft(
        title: ArticleTitle,
        markdown_content: MarkdownContent,
        cover_image: Option<CoverImage>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title,
            markdown_content,
            cover_image,
            created,
            author,
            status: ArticleStatus::Draft,
            published_at: None,
            revision: 0,
        }
    }

    /// Rebuild an article from stored parts.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: ArticleId,
        title: ArticleTitle,
        markdown_content: MarkdownContent,
        cover_image: Option<CoverImage>,
        created: DateTime<Utc>,
        author: Author,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
        revision: u64,
    ) -> DomainResult<Self> {
        match (status, published_at) {
            (ArticleStatus::Published, None) => {
                return Err(DomainError::Validation(
                    "published articles require published_at".into(),
                ));
            }
            (ArticleStatus::Draft | ArticleStatus::Archived, Some(_)) => {
                return Err(DomainError::Validation(format!(
                    "{status} articles cannot carry published_at"
                )));
            }
            _ => {}
        }

        Ok(Self {
            id: Some(id),
            title,
            markdown_content,
            cover_image,
            created,
            author,
            status,
            published_at,
            revision,
        })
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    /// Storage view of the identifier: `0` while transient.
    pub fn raw_id(&self) -> i64 {
        self.id.map(i64::from).unwrap_or(0)
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn assign_id(&mut self, id: ArticleId) -> DomainResult<()> {
        if let Some(existing) = self.id {
            return Err(DomainError::Conflict(format!(
                "article already persisted with id {existing}"
            )));
        }
        self.id = Some(id);
        Ok(())
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Called by a repository once a write of this revision has been stored.
    pub fn advance_revision(&mut self) {
        self.revision += 1;
    }

    pub fn is_archived(&self) -> bool {
        self.status == ArticleStatus::Archived
    }

    pub fn set_title(&mut self, title: ArticleTitle) {
        self.title = title;
    }

    pub fn set_markdown_content(&mut self, content: MarkdownContent) {
        self.markdown_content = content;
    }

    pub fn set_cover_image(&mut self, cover_image: Option<CoverImage>) {
        self.cover_image = cover_image;
    }

    pub fn set_author(&mut self, author: Author) {
        self.author = author;
    }

    /// Move the article to the next lifecycle state. On error nothing changes.
    pub fn transition(
        &mut self,
        transition: ArticleTransition,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let next = self.status.apply(transition)?;
        self.published_at = match next {
            ArticleStatus::Published => Some(now),
            ArticleStatus::Draft | ArticleStatus::Archived => None,
        };
        self.status = next;
        Ok(())
    }
}

impl ArticleState for Article {
    fn state(&self) -> &str {
        self.status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::{AuthorId, AuthorName};
    use chrono::{Duration, TimeZone};

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn author() -> Author {
        Author::new(AuthorId::new(1).unwrap(), AuthorName::new("Ada").unwrap())
    }

    fn sample_article() -> Article {
        Article::draft(
            ArticleTitle::new("title"),
            MarkdownContent::new("# body"),
            Some(CoverImage::parse("https://img.example.com/c.png").unwrap()),
            author(),
            created_at(),
        )
    }

    #[test]
    fn new_article_is_transient_draft() {
        let article = sample_article();
        assert!(!article.is_persisted());
        assert_eq!(article.raw_id(), 0);
        assert_eq!(article.status(), ArticleStatus::Draft);
        assert_eq!(article.state(), "draft");
    }

    #[test]
    fn assign_id_marks_persisted_once() {
        let mut article = sample_article();
        article.assign_id(ArticleId::new(5).unwrap()).unwrap();
        assert!(article.is_persisted());
        assert_eq!(article.raw_id(), 5);

        let err = article.assign_id(ArticleId::new(6).unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(article.raw_id(), 5);
    }

    #[test]
    fn setters_touch_only_their_field() {
        let original = sample_article();

        let mut article = original.clone();
        article.set_title(ArticleTitle::new("other"));
        assert_eq!(article.title.as_str(), "other");
        assert_eq!(article.markdown_content, original.markdown_content);
        assert_eq!(article.cover_image, original.cover_image);
        assert_eq!(article.author, original.author);
        assert_eq!(article.created(), original.created());

        let mut article = original.clone();
        article.set_cover_image(None);
        assert!(article.cover_image.is_none());
        assert_eq!(article.title, original.title);
        assert_eq!(article.markdown_content, original.markdown_content);

        let mut article = original.clone();
        let other = Author::new(AuthorId::new(2).unwrap(), AuthorName::new("Grace").unwrap());
        article.set_author(other.clone());
        assert_eq!(article.author, other);
        assert_eq!(article.title, original.title);
        assert_eq!(article.status(), original.status());
    }

    #[test]
    fn new_article_starts_at_revision_zero() {
        let mut article = sample_article();
        assert_eq!(article.revision(), 0);
        article.advance_revision();
        assert_eq!(article.revision(), 1);
        assert_ne!(article, sample_article());
    }

    #[test]
    fn equality_is_field_wise() {
        assert_eq!(sample_article(), sample_article());

        let mut changed = sample_article();
        changed.set_markdown_content(MarkdownContent::new("other"));
        assert_ne!(changed, sample_article());
    }

    #[test]
    fn publish_then_unpublish() {
        let mut article = sample_article();
        let now = created_at() + Duration::hours(1);

        article.transition(ArticleTransition::Publish, now).unwrap();
        assert_eq!(article.status(), ArticleStatus::Published);
        assert_eq!(article.published_at(), Some(now));

        article
            .transition(ArticleTransition::Unpublish, now + Duration::minutes(5))
            .unwrap();
        assert_eq!(article.status(), ArticleStatus::Draft);
        assert!(article.published_at().is_none());
    }

    #[test]
    fn rejected_transition_leaves_article_untouched() {
        let mut article = sample_article();
        let before = article.clone();
        let err = article
            .transition(ArticleTransition::Restore, created_at())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(article, before);
    }

    #[test]
    fn rehydrate_checks_published_at_consistency() {
        let id = ArticleId::new(1).unwrap();
        let published = Article::rehydrate(
            id,
            ArticleTitle::new("t"),
            MarkdownContent::new("b"),
            None,
            created_at(),
            author(),
            ArticleStatus::Published,
            None,
            0,
        );
        assert!(published.is_err());

        let draft = Article::rehydrate(
            id,
            ArticleTitle::new("t"),
            MarkdownContent::new("b"),
            None,
            created_at(),
            author(),
            ArticleStatus::Draft,
            Some(created_at()),
            0,
        );
        assert!(draft.is_err());

        let archived = Article::rehydrate(
            id,
            ArticleTitle::new("t"),
            MarkdownContent::new("b"),
            None,
            created_at(),
            author(),
            ArticleStatus::Archived,
            None,
            3,
        )
        .unwrap();
        assert!(archived.is_persisted());
        assert_eq!(archived.revision(), 3);
        assert!(archived.is_archived());
    }
}
