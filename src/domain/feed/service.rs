use super::error::FeedServiceError;
use super::{CreateFeedRequest, FeedCheck, FeedPreset, FeedPresetsRepository, FeedSource};
use crate::infrastructure::repositories::{FeedFetcher, FeedRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct FeedService {
    feed_repo: Arc<FeedRepository>,
    presets_repo: Arc<dyn FeedPresetsRepository>,
    fetcher: Arc<dyn FeedFetcher>,
}

impl FeedService {
    pub fn new(
        feed_repo: Arc<FeedRepository>,
        presets_repo: Arc<dyn FeedPresetsRepository>,
        fetcher: Arc<dyn FeedFetcher>,
    ) -> Self {
        Self {
            feed_repo,
            presets_repo,
            fetcher,
        }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    async fn list_feeds(&self) -> Result<Vec<FeedSource>, FeedServiceError>;

    /// Register a feed. Name and URL are trimmed and must be non-blank;
    /// the URL is not checked for reachability.
    async fn add_feed(&self, request: CreateFeedRequest) -> Result<FeedSource, FeedServiceError>;

    /// Remove every feed registered under `url`, returning the count removed
    async fn remove_feed(&self, url: &str) -> Result<usize, FeedServiceError>;

    fn list_presets(&self) -> Vec<FeedPreset>;

    /// Fetch each registered feed once and report status, entry count and first entry
    async fn check_feeds(&self) -> Result<Vec<FeedCheck>, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn list_feeds(&self) -> Result<Vec<FeedSource>, FeedServiceError> {
        Ok(self.feed_repo.find_all().await?)
    }

    async fn add_feed(&self, request: CreateFeedRequest) -> Result<FeedSource, FeedServiceError> {
        let name = request.name.trim();
        let url = request.url.trim();

        if name.is_empty() || url.is_empty() {
            return Err(FeedServiceError::Invalid(
                "Feed name and URL are both required".to_string(),
            ));
        }

        let feed = FeedSource {
            name: name.to_string(),
            url: url.to_string(),
            category: request.category,
        };

        self.feed_repo
            .create(feed.clone())
            .await
            .map_err(|e| FeedServiceError::Dependency(e.to_string()))?;

        tracing::info!(name = %feed.name, url = %feed.url, category = %feed.category, "Feed added");

        Ok(feed)
    }

    async fn remove_feed(&self, url: &str) -> Result<usize, FeedServiceError> {
        let removed = self
            .feed_repo
            .delete_by_url(url)
            .await
            .map_err(|e| FeedServiceError::Dependency(e.to_string()))?;

        tracing::info!(url = %url, removed = removed, "Feed removed");

        Ok(removed)
    }

    fn list_presets(&self) -> Vec<FeedPreset> {
        self.presets_repo.get_all_presets()
    }

    async fn check_feeds(&self) -> Result<Vec<FeedCheck>, FeedServiceError> {
        let feeds = self.list_feeds().await?;
        let mut checks = Vec::with_capacity(feeds.len());

        for feed in feeds {
            let check = match self.fetcher.fetch(&feed.url).await {
                Ok(fetched) => {
                    let first = fetched.entries.first();
                    let error = fetched
                        .entries
                        .is_empty()
                        .then(|| "No entries found".to_string());
                    FeedCheck {
                        status: Some(fetched.status),
                        entries: fetched.entries.len(),
                        first_title: first.and_then(|e| e.title.clone()),
                        first_published: first.and_then(|e| e.published.clone()),
                        error,
                        name: feed.name,
                        url: feed.url,
                    }
                }
                Err(e) => FeedCheck {
                    status: e.status(),
                    entries: 0,
                    first_title: None,
                    first_published: None,
                    error: Some(e.to_string()),
                    name: feed.name,
                    url: feed.url,
                },
            };

            tracing::debug!(
                url = %check.url,
                status = ?check.status,
                entries = check.entries,
                "Feed checked"
            );
            checks.push(check);
        }

        Ok(checks)
    }
}
