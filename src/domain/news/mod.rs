pub mod error;
pub mod model;
pub mod published;
pub mod service;

pub use error::NewsServiceError;
pub use model::NewsItem;
pub use service::{merge_news, NewsService, NewsServiceApi, MAX_NEWS_ITEMS};

use crate::domain::feed::FeedCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NEWS_LIMIT: usize = 20;
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Query for GET /api/news
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl NewsQuery {
    pub fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_NEWS_LIMIT)
            .clamp(1, MAX_NEWS_ITEMS)
    }
}

/// News item as shown on the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsItemResponse {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published: DateTime<Utc>,
    pub source: String,
    pub category: FeedCategory,
}

impl From<NewsItem> for NewsItemResponse {
    fn from(item: NewsItem) -> Self {
        Self {
            summary: item.summary_preview(SUMMARY_PREVIEW_CHARS),
            title: item.title,
            link: item.link,
            published: item.published,
            source: item.source,
            category: item.category,
        }
    }
}

/// Response for POST /api/admin/news/collect
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectResponse {
    pub added: usize,
}
