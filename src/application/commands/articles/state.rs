// src/application/commands/articles/state.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleTransition},
};

pub struct ChangeArticleStateCommand {
    pub id: i64,
    pub action: ArticleTransition,
}

impl ArticleCommandService {
    /// Apply a lifecycle transition. Asking for the state the article is
    /// already in returns it unchanged without writing, so repeated
    /// unpublish/archive/restore requests are idempotent. A concurrent write
    /// between load and store surfaces as a conflict.
    pub async fn change_state(
        &self,
        command: ChangeArticleStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(ArticleId::new(command.id)?).await?;

        if article.status() == command.action.target() {
            return Ok(article.into());
        }

        let from = article.status();
        article.transition(command.action, self.clock.now())?;
        let updated = self.write_repo.update(&article).await?;

        tracing::info!(
            article_id = updated.raw_id(),
            %from,
            to = %updated.status(),
            "article state changed"
        );
        Ok(updated.into())
    }
}
