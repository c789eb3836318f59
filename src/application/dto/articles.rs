use crate::domain::{
    article::{Article, ArticleState},
    author::Author,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub markdown_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub state: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created: DateTime<Utc>,
    pub author: AuthorDto,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.raw_id(),
            state: article.state().to_owned(),
            published_at: article.published_at(),
            created: article.created(),
            cover_image: article.cover_image.map(|cover| cover.as_str().to_owned()),
            title: article.title.into_inner(),
            markdown_content: article.markdown_content.into_inner(),
            author: article.author.into(),
        }
    }
}
