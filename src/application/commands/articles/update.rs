// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleTitle, MarkdownContent},
};

/// Partial update. `cover_image: Some(None)` clears the cover.
///
/// Fails with a conflict if the article changed between load and write.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub markdown_content: Option<String>,
    pub cover_image: Option<Option<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(ArticleId::new(command.id)?).await?;

        if article.is_archived() {
            return Err(ApplicationError::conflict(
                "archived articles are read-only",
            ));
        }

        let UpdateArticleCommand {
            id: _,
            title,
            markdown_content,
            cover_image,
        } = command;

        if let Some(title) = title {
            let title = ArticleTitle::new(title);
            self.policy.check_title(&title)?;
            article.set_title(title);
        }

        if let Some(content) = markdown_content {
            article.set_markdown_content(MarkdownContent::new(content));
        }

        if let Some(cover) = cover_image {
            let cover = cover
                .as_deref()
                .map(|raw| self.parse_cover_image(raw))
                .transpose()?;
            article.set_cover_image(cover);
        }

        let updated = self.write_repo.update(&article).await?;
        tracing::debug!(
            article_id = updated.raw_id(),
            revision = updated.revision(),
            "article updated"
        );
        Ok(updated.into())
    }
}
