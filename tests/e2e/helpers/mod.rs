use market_briefing::infrastructure::config::{Config, Environment, LogFormat};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

use api_client::TestClient;
use fixtures::TestFixtures;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub fixtures: TestFixtures,
    /// Serves RSS/Atom documents for registered feeds
    pub feed_server: MockServer,
    /// Stands in for the chat completions endpoint
    pub model_server: MockServer,
    _data_dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { TestContext::start(true).await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Data directory is removed when the TempDir drops
        }
    }
}

impl TestContext {
    /// Start a server on a fresh data directory. Without a generator the
    /// report endpoint behaves as if no API key were configured.
    pub async fn start(with_generator: bool) -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");
        let feed_server = MockServer::start().await;
        let model_server = MockServer::start().await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            data_dir: data_dir.path().to_path_buf(),
            admin_password: ADMIN_PASSWORD.to_string(),
            llm_api_key: with_generator.then(|| "test-key".to_string()),
            llm_api_base: model_server.uri(),
            llm_model: "test-model".to_string(),
            feed_timeout_secs: 5,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
        };

        market_briefing::infrastructure::storage::ensure_data_dir(&config.data_dir)
            .await
            .expect("Failed to seed data dir");

        let app = create_app(config.clone());

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            client: TestClient::new(&base_url, ADMIN_PASSWORD),
            fixtures: TestFixtures::new(data_dir.path()),
            config,
            feed_server,
            model_server,
            _data_dir: data_dir,
        }
    }

    pub fn feed_url(&self, feed_path: &str) -> String {
        format!("{}{}", self.feed_server.uri(), feed_path)
    }

    /// Serve `body` as an RSS document at `feed_path`
    pub async fn mount_feed(&self, feed_path: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(feed_path))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/rss+xml")
                    .set_body_string(body),
            )
            .mount(&self.feed_server)
            .await;
    }

    /// Answer every chat completion with `content`
    pub async fn mount_model_reply(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::chat_completion(content)))
            .mount(&self.model_server)
            .await;
    }

    /// Reject every chat completion as a client error
    pub async fn mount_model_failure(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "message": message,
                    "type": "invalid_request_error",
                    "param": null,
                    "code": null
                }
            })))
            .mount(&self.model_server)
            .await;
    }

    pub async fn model_calls(&self) -> usize {
        self.model_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    pub async fn add_feed(&self, name: &str, url: &str) {
        self.client
            .post_admin(
                "/api/admin/feeds",
                &serde_json::json!({ "name": name, "url": url, "category": "Economy" }),
            )
            .await
            .unwrap()
            .assert_status(hyper::StatusCode::CREATED);
    }
}

/// Wire the application the same way the binary does
fn create_app(config: Config) -> axum::Router {
    use market_briefing::{
        controllers::{
            dashboard::DashboardController, feed::FeedController, news::NewsController,
            report::ReportController,
        },
        domain::{
            feed::FeedService, news::NewsService, report::ReportService, stats::StatsService,
        },
        infrastructure::{
            http::build_router,
            repositories::{
                FeedFetcher, FeedRepository, HardcodedFeedPresetsRepository, HttpFeedFetcher,
                NewsRepository, OpenAiTextGenerator, ReportRepository, StatsRepository,
                TextGenerator,
            },
        },
    };

    let config = Arc::new(config);

    let fetcher: Arc<dyn FeedFetcher> = Arc::new(
        HttpFeedFetcher::new(Duration::from_secs(config.feed_timeout_secs))
            .expect("Failed to build feed fetcher"),
    );
    let generator = config.llm_api_key.as_deref().map(|api_key| {
        Arc::new(OpenAiTextGenerator::from_settings(
            api_key,
            &config.llm_api_base,
            &config.llm_model,
        )) as Arc<dyn TextGenerator>
    });

    // Instantiate repositories
    let feed_repo = Arc::new(FeedRepository::new(&config.data_dir));
    let news_repo = Arc::new(NewsRepository::new(&config.data_dir));
    let report_repo = Arc::new(ReportRepository::new(&config.data_dir));
    let stats_repo = Arc::new(StatsRepository::new(&config.data_dir));
    let presets_repo = Arc::new(HardcodedFeedPresetsRepository::new());

    // Instantiate services
    let feed_service = Arc::new(FeedService::new(feed_repo.clone(), presets_repo, fetcher.clone()));
    let news_service = Arc::new(NewsService::new(feed_repo, news_repo, fetcher));
    let report_service = Arc::new(ReportService::new(report_repo, generator));
    let stats_service = Arc::new(StatsService::new(stats_repo));

    // Instantiate controllers
    let dashboard_controller = Arc::new(DashboardController::new(
        stats_service,
        report_service.clone(),
        news_service.clone(),
    ));
    let feed_controller = Arc::new(FeedController::new(feed_service));
    let news_controller = Arc::new(NewsController::new(news_service.clone()));
    let report_controller = Arc::new(ReportController::new(report_service, news_service));

    build_router(
        config,
        dashboard_controller,
        feed_controller,
        news_controller,
        report_controller,
    )
}
