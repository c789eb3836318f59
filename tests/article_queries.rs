use articles_core::application::commands::articles::ChangeArticleStateCommand;
use articles_core::application::error::ApplicationError;
use articles_core::application::queries::articles::{GetArticleByIdQuery, ListArticlesQuery};
use articles_core::domain::article::ArticleTransition;
use chrono::Duration;

mod support;

use support::{CreateCommandBuilder, TestApp, test_app};

async fn seeded_app() -> TestApp {
    let app = test_app();
    let commands = &app.services.article_commands;

    commands
        .create_article(CreateCommandBuilder::new().title("first").build())
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(1));
    commands
        .create_article(
            CreateCommandBuilder::new()
                .title("second")
                .author(2, "Grace")
                .published()
                .build(),
        )
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(1));
    let third = commands
        .create_article(CreateCommandBuilder::new().title("third").build())
        .await
        .unwrap();
    commands
        .change_state(ChangeArticleStateCommand {
            id: third.id,
            action: ArticleTransition::Archive,
        })
        .await
        .unwrap();

    app
}

#[tokio::test]
async fn get_by_id_returns_article() {
    let app = seeded_app().await;
    let dto = app
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: 2 })
        .await
        .unwrap();
    assert_eq!(dto.title, "second");
    assert_eq!(dto.state, "published");
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let app = seeded_app().await;
    let err = app
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: 99 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = seeded_app().await;
    let items = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap();
    let titles: Vec<&str> = items.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn list_filters_by_state_and_author() {
    let app = seeded_app().await;
    let queries = &app.services.article_queries;

    let drafts = queries
        .list_articles(ListArticlesQuery {
            state: Some("Draft".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "first");

    let archived = queries
        .list_articles(ListArticlesQuery {
            state: Some("archived".into()),
            author_id: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].title, "third");

    let by_grace = queries
        .list_articles(ListArticlesQuery {
            author_id: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_grace.len(), 1);
    assert_eq!(by_grace[0].author.name, "Grace");
}

#[tokio::test]
async fn list_rejects_unknown_state_label() {
    let app = seeded_app().await;
    let err = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            state: Some("scheduled".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn list_respects_limit() {
    let app = seeded_app().await;
    let items = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn list_all_is_not_capped_by_page_size() {
    let app = test_app();
    for n in 0..101 {
        app.services
            .article_commands
            .create_article(CreateCommandBuilder::new().title(format!("article {n}")).build())
            .await
            .unwrap();
    }
    let queries = &app.services.article_queries;

    let page = queries
        .list_articles(ListArticlesQuery {
            limit: 1_000,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 100);

    let all = queries
        .list_all_articles(ListArticlesQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 101);
}
