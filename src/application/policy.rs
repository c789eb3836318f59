// src/application/policy.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::AppConfig;
use crate::domain::article::{ArticleTitle, CoverImage};

pub const DEFAULT_TITLE_MAX_LEN: usize = 200;

/// Input rules applied by the command service before an article is stored.
#[derive(Debug, Clone)]
pub struct ArticlePolicy {
    title_max_len: usize,
    cover_image_schemes: Vec<String>,
}

impl Default for ArticlePolicy {
    fn default() -> Self {
        Self {
            title_max_len: DEFAULT_TITLE_MAX_LEN,
            cover_image_schemes: vec!["http".into(), "https".into()],
        }
    }
}

impl ArticlePolicy {
    pub fn new(title_max_len: usize, cover_image_schemes: Vec<String>) -> Self {
        Self {
            title_max_len,
            cover_image_schemes: cover_image_schemes
                .into_iter()
                .map(|scheme| scheme.to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.title_max_len(),
            config.cover_image_schemes().to_vec(),
        )
    }

    pub fn check_title(&self, title: &ArticleTitle) -> ApplicationResult<()> {
        let value = title.as_str();
        if value.trim().is_empty() {
            return Err(ApplicationError::validation("title cannot be empty"));
        }
        let len = value.chars().count();
        if len > self.title_max_len {
            return Err(ApplicationError::validation(format!(
                "title is {len} characters long, the limit is {}",
                self.title_max_len
            )));
        }
        Ok(())
    }

    pub fn check_cover_image(&self, cover: &CoverImage) -> ApplicationResult<()> {
        if self.cover_image_schemes.iter().any(|s| s == cover.scheme()) {
            Ok(())
        } else {
            Err(ApplicationError::validation(format!(
                "cover image scheme '{}' is not allowed",
                cover.scheme()
            )))
        }
    }
}
