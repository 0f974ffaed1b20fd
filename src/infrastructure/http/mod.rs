use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        dashboard::DashboardController, feed::FeedController, health, news::NewsController,
        report::ReportController,
    },
    infrastructure::auth::{admin_middleware, request_id_middleware},
};

/// Build the application router: public read routes plus the password-gated admin routes
pub fn build_router(
    config: Arc<Config>,
    dashboard_controller: Arc<DashboardController>,
    feed_controller: Arc<FeedController>,
    news_controller: Arc<NewsController>,
    report_controller: Arc<ReportController>,
) -> Router {
    // Public routes
    let dashboard_routes = Router::new()
        .route("/api/dashboard", get(DashboardController::dashboard))
        .route("/api/stats", get(DashboardController::stats))
        .with_state(dashboard_controller);

    let news_routes = Router::new()
        .route("/api/news", get(NewsController::list_news))
        .with_state(news_controller.clone());

    let report_routes = Router::new()
        .route("/api/reports/latest", get(ReportController::latest))
        .with_state(report_controller.clone());

    // Admin routes (require x-admin-password)
    let admin_feed_routes = Router::new()
        .route(
            "/api/admin/feeds",
            get(FeedController::list_feeds)
                .post(FeedController::create_feed)
                .delete(FeedController::delete_feed),
        )
        .route("/api/admin/feeds/check", post(FeedController::check_feeds))
        .route("/api/admin/feed-presets", get(FeedController::list_presets))
        .with_state(feed_controller)
        .route_layer(middleware::from_fn_with_state(
            config.clone(),
            admin_middleware,
        ));

    let admin_news_routes = Router::new()
        .route("/api/admin/news/collect", post(NewsController::collect))
        .with_state(news_controller)
        .route_layer(middleware::from_fn_with_state(
            config.clone(),
            admin_middleware,
        ));

    let admin_report_routes = Router::new()
        .route("/api/admin/reports", post(ReportController::generate))
        .with_state(report_controller)
        .route_layer(middleware::from_fn_with_state(
            config.clone(),
            admin_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(dashboard_routes)
        .merge(news_routes)
        .merge(report_routes)
        .merge(admin_feed_routes)
        .merge(admin_news_routes)
        .merge(admin_report_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
