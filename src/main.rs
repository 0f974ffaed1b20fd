use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use market_briefing::infrastructure::config::{Config, LogFormat};
use market_briefing::infrastructure::http::{build_router, start_http_server};
use market_briefing::infrastructure::repositories::{FeedFetcher, TextGenerator};
use market_briefing::infrastructure::storage::ensure_data_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Market Briefing on {}:{}",
        config.host,
        config.port
    );

    // Data directory is the only hard startup requirement
    ensure_data_dir(&config.data_dir).await.map_err(|e| {
        tracing::error!(
            data_dir = %config.data_dir.display(),
            error = %e,
            "Cannot prepare data directory"
        );
        e
    })?;
    tracing::info!(data_dir = %config.data_dir.display(), "Data directory ready");

    let fetcher: Arc<dyn FeedFetcher> = Arc::new(
        market_briefing::infrastructure::repositories::HttpFeedFetcher::new(Duration::from_secs(
            config.feed_timeout_secs,
        ))?,
    );

    let generator: Option<Arc<dyn TextGenerator>> = match config.llm_api_key.as_deref() {
        Some(api_key) => {
            tracing::info!(
                api_base = %config.llm_api_base,
                model = %config.llm_model,
                "Text generator configured"
            );
            let generator =
                market_briefing::infrastructure::repositories::OpenAiTextGenerator::from_settings(
                    api_key,
                    &config.llm_api_base,
                    &config.llm_model,
                );
            Some(Arc::new(generator) as Arc<dyn TextGenerator>)
        }
        None => {
            tracing::warn!("LLM_API_KEY not set, report generation disabled");
            None
        }
    };

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject data directory)
    tracing::info!("Instantiating repositories...");
    let feed_repo = Arc::new(market_briefing::infrastructure::repositories::FeedRepository::new(&config.data_dir));
    let news_repo = Arc::new(market_briefing::infrastructure::repositories::NewsRepository::new(&config.data_dir));
    let report_repo = Arc::new(market_briefing::infrastructure::repositories::ReportRepository::new(&config.data_dir));
    let stats_repo = Arc::new(market_briefing::infrastructure::repositories::StatsRepository::new(&config.data_dir));
    let presets_repo = Arc::new(market_briefing::infrastructure::repositories::HardcodedFeedPresetsRepository::new());

    // 2. Instantiate services (inject repositories and clients)
    tracing::info!("Instantiating services...");
    let feed_service = Arc::new(market_briefing::domain::feed::FeedService::new(
        feed_repo.clone(),
        presets_repo,
        fetcher.clone(),
    ));
    let news_service = Arc::new(market_briefing::domain::news::NewsService::new(
        feed_repo,
        news_repo,
        fetcher,
    ));
    let report_service = Arc::new(market_briefing::domain::report::ReportService::new(
        report_repo,
        generator,
    ));
    let stats_service = Arc::new(market_briefing::domain::stats::StatsService::new(stats_repo));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let dashboard_controller = Arc::new(market_briefing::controllers::dashboard::DashboardController::new(
        stats_service,
        report_service.clone(),
        news_service.clone(),
    ));
    let feed_controller = Arc::new(market_briefing::controllers::feed::FeedController::new(feed_service));
    let news_controller = Arc::new(market_briefing::controllers::news::NewsController::new(news_service.clone()));
    let report_controller = Arc::new(market_briefing::controllers::report::ReportController::new(
        report_service,
        news_service,
    ));

    // Start HTTP server with all routes
    let app = build_router(
        config.clone(),
        dashboard_controller,
        feed_controller,
        news_controller,
        report_controller,
    );
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "market_briefing=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "market_briefing=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
