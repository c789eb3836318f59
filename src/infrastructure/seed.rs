// src/infrastructure/seed.rs
//! Bulk import of articles from a JSON seed file.
//!
//! Entries go through the regular command service, so they are validated
//! exactly like any other article. Entries rejected for bad input are
//! skipped with a warning; backend failures abort the import.
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::application::{
    commands::articles::{ArticleCommandService, ChangeArticleStateCommand, CreateArticleCommand},
    error::ApplicationError,
};
use crate::domain::article::{ArticleStatus, ArticleTransition};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAuthor {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub markdown_content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub author: SeedAuthor,
    #[serde(default)]
    pub state: ArticleStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub imported: usize,
    pub skipped: usize,
}

pub fn parse_seed(raw: &str) -> Result<Vec<SeedArticle>, SeedError> {
    Ok(serde_json::from_str(raw)?)
}

pub async fn load_seed_file(
    path: &Path,
    commands: &ArticleCommandService,
) -> Result<SeedReport, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let entries = parse_seed(&raw)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "importing seed file");
    import_articles(entries, commands).await
}

pub async fn import_articles(
    entries: Vec<SeedArticle>,
    commands: &ArticleCommandService,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match import_one(entry, commands).await {
            Ok(()) => report.imported += 1,
            Err(err) if err.is_client_error() => {
                tracing::warn!(index, error = %err, "skipping seed entry");
                report.skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(report)
}

async fn import_one(
    entry: SeedArticle,
    commands: &ArticleCommandService,
) -> Result<(), ApplicationError> {
    let mut builder = CreateArticleCommand::builder()
        .title(entry.title)
        .markdown_content(entry.markdown_content)
        .author(entry.author.id, entry.author.name)
        .publish(entry.state == ArticleStatus::Published);
    if let Some(cover) = entry.cover_image {
        builder = builder.cover_image(cover);
    }
    let command = builder.build().map_err(ApplicationError::validation)?;

    let created = commands.create_article(command).await?;

    if entry.state == ArticleStatus::Archived {
        commands
            .change_state(ChangeArticleStateCommand {
                id: created.id,
                action: ArticleTransition::Archive,
            })
            .await?;
    }
    Ok(())
}
