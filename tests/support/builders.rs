// tests/support/builders.rs
use std::sync::Arc;

use articles_core::application::{
    commands::articles::CreateArticleCommand, policy::ArticlePolicy,
    services::ApplicationServices,
};
use articles_core::infrastructure::repositories::InMemoryArticleRepository;

use super::clock::ManualClock;

pub struct TestApp {
    pub services: ApplicationServices,
    pub repo: Arc<InMemoryArticleRepository>,
    pub clock: Arc<ManualClock>,
}

pub fn test_app() -> TestApp {
    test_app_with_policy(ArticlePolicy::default())
}

pub fn test_app_with_policy(policy: ArticlePolicy) -> TestApp {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let clock = Arc::new(ManualClock::default());
    let services = ApplicationServices::new(repo.clone(), repo.clone(), policy, clock.clone());
    TestApp {
        services,
        repo,
        clock,
    }
}

pub struct CreateCommandBuilder {
    title: String,
    content: String,
    cover: Option<String>,
    author_id: i64,
    author_name: String,
    publish: bool,
}

impl CreateCommandBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            content: "# Test body".into(),
            cover: Some("https://img.example.com/cover.png".into()),
            author_id: 1,
            author_name: "Ada".into(),
            publish: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn cover(mut self, cover: Option<&str>) -> Self {
        self.cover = cover.map(str::to_owned);
        self
    }

    pub fn author(mut self, id: i64, name: impl Into<String>) -> Self {
        self.author_id = id;
        self.author_name = name.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.publish = true;
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        let mut builder = CreateArticleCommand::builder()
            .title(self.title)
            .markdown_content(self.content)
            .author(self.author_id, self.author_name)
            .publish(self.publish);
        if let Some(cover) = self.cover {
            builder = builder.cover_image(cover);
        }
        builder.build().unwrap()
    }
}
