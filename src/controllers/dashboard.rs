use axum::{
    extract::{Query, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::news::{NewsItemResponse, NewsService, NewsServiceApi, DEFAULT_NEWS_LIMIT};
use crate::domain::report::{ReportResponse, ReportService, ReportServiceApi};
use crate::domain::stats::{StatsResponse, StatsService, StatsServiceApi};

const VISITED_COOKIE: &str = "visited";
const VISITED_SET_COOKIE: &str = "visited=1; Path=/; HttpOnly";

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub visitors: u64,
    pub report: Option<ReportResponse>,
    pub news: Vec<NewsItemResponse>,
}

pub struct DashboardController {
    stats_service: Arc<StatsService>,
    report_service: Arc<ReportService>,
    news_service: Arc<NewsService>,
}

impl DashboardController {
    pub fn new(
        stats_service: Arc<StatsService>,
        report_service: Arc<ReportService>,
        news_service: Arc<NewsService>,
    ) -> Self {
        Self {
            stats_service,
            report_service,
            news_service,
        }
    }

    /// GET /api/dashboard?q= - Visitor count, latest report and news in one call.
    /// The first request of a session (no `visited` cookie) counts as a visit.
    pub async fn dashboard(
        State(controller): State<Arc<DashboardController>>,
        headers: HeaderMap,
        Query(query): Query<DashboardQuery>,
    ) -> Response {
        let first_visit = !has_visited_cookie(&headers);

        let visitors = if first_visit {
            controller.stats_service.increment().await
        } else {
            controller.stats_service.read().await
        };

        let report = controller
            .report_service
            .latest_report()
            .await
            .map(ReportResponse::from);

        let news = controller
            .news_service
            .search(query.q.as_deref(), DEFAULT_NEWS_LIMIT)
            .await
            .into_iter()
            .map(NewsItemResponse::from)
            .collect();

        let mut response = Json(DashboardResponse {
            visitors,
            report,
            news,
        })
        .into_response();

        if first_visit {
            response
                .headers_mut()
                .insert(SET_COOKIE, HeaderValue::from_static(VISITED_SET_COOKIE));
        }

        response
    }

    /// GET /api/stats - Read-only visitor count
    pub async fn stats(State(controller): State<Arc<DashboardController>>) -> Json<StatsResponse> {
        Json(StatsResponse::from(controller.stats_service.stats().await))
    }
}

fn has_visited_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, _)| name == VISITED_COOKIE)
}
