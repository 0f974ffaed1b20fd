use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::news::{NewsService, NewsServiceApi};
use crate::domain::report::{
    Analysis, ReportResponse, ReportService, ReportServiceApi, NO_NEWS_SENTINEL,
};
use crate::error::{AppError, AppResult};

pub struct ReportController {
    report_service: Arc<ReportService>,
    news_service: Arc<NewsService>,
}

impl ReportController {
    pub fn new(report_service: Arc<ReportService>, news_service: Arc<NewsService>) -> Self {
        Self {
            report_service,
            news_service,
        }
    }

    /// GET /api/reports/latest - Most recent report with chart data
    pub async fn latest(
        State(controller): State<Arc<ReportController>>,
    ) -> AppResult<Json<ReportResponse>> {
        let report = controller
            .report_service
            .latest_report()
            .await
            .ok_or_else(|| AppError::NotFound("No report yet".to_string()))?;
        Ok(Json(ReportResponse::from(report)))
    }

    /// POST /api/admin/reports - Analyze stored news and save the report.
    ///
    /// Only a completed synthesis is persisted.
    pub async fn generate(
        State(controller): State<Arc<ReportController>>,
    ) -> AppResult<(StatusCode, Json<ReportResponse>)> {
        let news = controller.news_service.list_news().await;

        match controller.report_service.analyze(&news).await? {
            Analysis::Completed(content) => {
                let report = controller.report_service.publish(content).await?;
                Ok((StatusCode::CREATED, Json(ReportResponse::from(report))))
            }
            Analysis::NoNews => Err(AppError::BadRequest(NO_NEWS_SENTINEL.to_string())),
            Analysis::SynthesisFailed(message) => Err(AppError::ExternalService(message)),
        }
    }
}
