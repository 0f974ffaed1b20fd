use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::feed::{
    CreateFeedRequest, FeedCheck, FeedPreset, FeedSource, RemoveFeedQuery, RemoveFeedResponse,
};
use crate::{
    domain::feed::{FeedService, FeedServiceApi},
    error::AppResult,
};

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /api/admin/feeds - List registered feeds
    pub async fn list_feeds(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<FeedSource>>> {
        let feeds = controller.feed_service.list_feeds().await?;
        Ok(Json(feeds))
    }

    /// POST /api/admin/feeds - Register a feed
    pub async fn create_feed(
        State(controller): State<Arc<FeedController>>,
        Json(request): Json<CreateFeedRequest>,
    ) -> AppResult<(StatusCode, Json<FeedSource>)> {
        let feed = controller.feed_service.add_feed(request).await?;
        Ok((StatusCode::CREATED, Json(feed)))
    }

    /// DELETE /api/admin/feeds?url= - Remove every feed with this URL
    pub async fn delete_feed(
        State(controller): State<Arc<FeedController>>,
        Query(query): Query<RemoveFeedQuery>,
    ) -> AppResult<Json<RemoveFeedResponse>> {
        let removed = controller.feed_service.remove_feed(&query.url).await?;
        Ok(Json(RemoveFeedResponse { removed }))
    }

    /// GET /api/admin/feed-presets
    pub async fn list_presets(
        State(controller): State<Arc<FeedController>>,
    ) -> Json<Vec<FeedPreset>> {
        Json(controller.feed_service.list_presets())
    }

    /// POST /api/admin/feeds/check - Fetch each feed once and report diagnostics
    pub async fn check_feeds(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<FeedCheck>>> {
        let checks = controller.feed_service.check_feeds().await?;
        Ok(Json(checks))
    }
}
