// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleTitle, ArticleTransition, MarkdownContent},
        author::{Author, AuthorId, AuthorName},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub markdown_content: String,
    pub cover_image: Option<String>,
    pub author_id: i64,
    pub author_name: String,
    pub publish: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    markdown_content: Option<String>,
    cover_image: Option<String>,
    author: Option<(i64, String)>,
    publish: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn markdown_content(mut self, content: impl Into<String>) -> Self {
        self.markdown_content = Some(content.into());
        self
    }

    pub fn cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    pub fn author(mut self, id: i64, name: impl Into<String>) -> Self {
        self.author = Some((id, name.into()));
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        let (author_id, author_name) = self.author.ok_or("author is required")?;
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            markdown_content: self.markdown_content.ok_or("markdown content is required")?,
            cover_image: self.cover_image,
            author_id,
            author_name,
            publish: self.publish,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title);
        self.policy.check_title(&title)?;
        let cover_image = command
            .cover_image
            .as_deref()
            .map(|raw| self.parse_cover_image(raw))
            .transpose()?;
        let author = Author::new(
            AuthorId::new(command.author_id)?,
            AuthorName::new(command.author_name)?,
        );
        let now = self.clock.now();

        let mut article = Article::draft(
            title,
            MarkdownContent::new(command.markdown_content),
            cover_image,
            author,
            now,
        );
        if command.publish {
            article.transition(ArticleTransition::Publish, now)?;
        }

        let created = self.write_repo.insert(article).await?;
        tracing::info!(
            article_id = created.raw_id(),
            state = %created.status(),
            "article created"
        );
        Ok(created.into())
    }
}
