use anyhow::Result;
use articles_core::{
    application::{
        policy::ArticlePolicy, ports::time::Clock, queries::articles::ListArticlesQuery,
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
    infrastructure::{repositories::InMemoryArticleRepository, seed, time::SystemClock},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let repo = Arc::new(InMemoryArticleRepository::new());
    let article_write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = repo.clone();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        ArticlePolicy::from_config(&config),
        clock,
    );

    match config.seed_path() {
        Some(path) => {
            let report = seed::load_seed_file(path, &services.article_commands).await?;
            tracing::info!(
                imported = report.imported,
                skipped = report.skipped,
                "seed import finished"
            );
        }
        None => tracing::info!("ARTICLES_SEED_PATH not set, starting with an empty catalogue"),
    }

    let articles = services
        .article_queries
        .list_all_articles(ListArticlesQuery::default())
        .await?;
    tracing::info!(count = articles.len(), "writing catalogue");

    println!("{}", serde_json::to_string_pretty(&articles)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
