use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::domain::news::{CollectResponse, NewsItemResponse, NewsQuery};
use crate::{
    domain::news::{NewsService, NewsServiceApi},
    error::AppResult,
};

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// GET /api/news?q=&limit= - Search stored news, newest first
    pub async fn list_news(
        State(controller): State<Arc<NewsController>>,
        Query(query): Query<NewsQuery>,
    ) -> Json<Vec<NewsItemResponse>> {
        let items = controller
            .news_service
            .search(query.q.as_deref(), query.limit())
            .await;
        Json(items.into_iter().map(NewsItemResponse::from).collect())
    }

    /// POST /api/admin/news/collect - Run the ingestion pipeline
    pub async fn collect(
        State(controller): State<Arc<NewsController>>,
    ) -> AppResult<Json<CollectResponse>> {
        let added = controller.news_service.collect().await?;
        Ok(Json(CollectResponse { added }))
    }
}
