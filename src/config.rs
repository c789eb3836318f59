// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::application::policy::DEFAULT_TITLE_MAX_LEN;

#[derive(Clone, Debug)]
pub struct AppConfig {
    seed_path: Option<PathBuf>,
    title_max_len: usize,
    cover_image_schemes: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_cover_image_schemes() -> Vec<String> {
    vec!["http".into(), "https".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_path = lookup("ARTICLES_SEED_PATH")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let title_max_len = match lookup("ARTICLE_TITLE_MAX_LEN") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "ARTICLE_TITLE_MAX_LEN must be a positive integer, got '{raw}'"
                    )));
                }
                Ok(value) => value,
            },
            None => DEFAULT_TITLE_MAX_LEN,
        };

        let cover_image_schemes = match lookup("COVER_IMAGE_SCHEMES") {
            Some(raw) => {
                let schemes: Vec<String> = raw
                    .split(',')
                    .map(|p| p.trim().to_ascii_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect();
                if schemes.is_empty() {
                    return Err(ConfigError::Invalid(
                        "COVER_IMAGE_SCHEMES must list at least one scheme".into(),
                    ));
                }
                schemes
            }
            None => default_cover_image_schemes(),
        };

        Ok(Self {
            seed_path,
            title_max_len,
            cover_image_schemes,
        })
    }

    pub fn seed_path(&self) -> Option<&PathBuf> {
        self.seed_path.as_ref()
    }

    pub fn title_max_len(&self) -> usize {
        self.title_max_len
    }

    pub fn cover_image_schemes(&self) -> &[String] {
        &self.cover_image_schemes
    }
}
