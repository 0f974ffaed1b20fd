pub mod error;
pub mod model;
pub mod service;

pub use error::FeedServiceError;
pub use model::{FeedCategory, FeedCheck, FeedPreset, FeedSource};
pub use service::{FeedService, FeedServiceApi};

use serde::{Deserialize, Serialize};

/// Request to register a new feed source
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFeedRequest {
    pub name: String,
    pub url: String,
    pub category: FeedCategory,
}

/// Query for DELETE /api/admin/feeds
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveFeedQuery {
    pub url: String,
}

/// Response for DELETE /api/admin/feeds
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveFeedResponse {
    pub removed: usize,
}

/// Source of curated feed presets
pub trait FeedPresetsRepository: Send + Sync {
    fn get_all_presets(&self) -> Vec<FeedPreset>;
}
