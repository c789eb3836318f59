// src/domain/article/state.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Anything that can report the lifecycle label of an article.
///
/// Implementations must return a non-empty label for every state they model.
pub trait ArticleState {
    fn state(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Draft,
        ArticleStatus::Published,
        ArticleStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
        }
    }

    /// Resolve the state reached by applying `transition`, or reject it.
    pub fn apply(self, transition: ArticleTransition) -> DomainResult<ArticleStatus> {
        use ArticleStatus::*;
        use ArticleTransition as T;

        match (self, transition) {
            (Draft, T::Publish) => Ok(Published),
            (Published, T::Unpublish) => Ok(Draft),
            (Draft | Published, T::Archive) => Ok(Archived),
            (Archived, T::Restore) => Ok(Draft),
            (from, action) => Err(DomainError::InvalidTransition {
                from: from.as_str(),
                action: action.as_str(),
            }),
        }
    }
}

impl ArticleState for ArticleStatus {
    fn state(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "archived" => Ok(ArticleStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown article state '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleTransition {
    Publish,
    Unpublish,
    Archive,
    Restore,
}

impl ArticleTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleTransition::Publish => "publish",
            ArticleTransition::Unpublish => "unpublish",
            ArticleTransition::Archive => "archive",
            ArticleTransition::Restore => "restore",
        }
    }

    pub fn target(&self) -> ArticleStatus {
        match self {
            ArticleTransition::Publish => ArticleStatus::Published,
            ArticleTransition::Unpublish | ArticleTransition::Restore => ArticleStatus::Draft,
            ArticleTransition::Archive => ArticleStatus::Archived,
        }
    }
}

impl fmt::Display for ArticleTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
