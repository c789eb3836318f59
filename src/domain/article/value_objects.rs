use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("article id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }

    /// Interpret a raw storage identifier: `0` is a transient article.
    pub fn from_raw(raw: i64) -> DomainResult<Option<Self>> {
        match raw {
            0 => Ok(None),
            raw => Self::new(raw).map(Some),
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Raw markdown source. Rendering happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkdownContent(String);

impl MarkdownContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MarkdownContent> for String {
    fn from(value: MarkdownContent) -> Self {
        value.0
    }
}

/// Absolute URL of an externally hosted cover image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoverImage(Url);

impl CoverImage {
    pub fn parse(value: &str) -> DomainResult<Self> {
        Url::parse(value.trim())
            .map(Self)
            .map_err(|err| DomainError::Validation(format!("invalid cover image url: {err}")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl From<Url> for CoverImage {
    fn from(value: Url) -> Self {
        Self(value)
    }
}

impl fmt::Display for CoverImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
