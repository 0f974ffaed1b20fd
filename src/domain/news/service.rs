use super::error::NewsServiceError;
use super::model::NewsItem;
use crate::infrastructure::repositories::{FeedFetcher, FeedRepository, NewsRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Upper bound on the persisted news collection
pub const MAX_NEWS_ITEMS: usize = 1000;

pub struct NewsService {
    feed_repo: Arc<FeedRepository>,
    news_repo: Arc<NewsRepository>,
    fetcher: Arc<dyn FeedFetcher>,
    collect_lock: Mutex<()>,
}

impl NewsService {
    pub fn new(
        feed_repo: Arc<FeedRepository>,
        news_repo: Arc<NewsRepository>,
        fetcher: Arc<dyn FeedFetcher>,
    ) -> Self {
        Self {
            feed_repo,
            news_repo,
            fetcher,
            collect_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    /// Fetch every registered feed and merge unseen entries into the store.
    ///
    /// This operation:
    /// - Skips feeds that fail to fetch or parse, or that have no entries
    /// - Deduplicates by link against the store and within the batch
    /// - Re-sorts by published time (newest first) and keeps the newest `MAX_NEWS_ITEMS`
    /// - Rewrites the store
    ///
    /// Returns the number of newly added items
    async fn collect(&self) -> Result<usize, NewsServiceError>;

    /// Stored items, newest first. Unreadable store reads as empty.
    async fn list_news(&self) -> Vec<NewsItem>;

    /// Items whose title or summary contains `term` (case-insensitive), capped at `limit`
    async fn search(&self, term: Option<&str>, limit: usize) -> Vec<NewsItem>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn collect(&self) -> Result<usize, NewsServiceError> {
        let _guard = self.collect_lock.lock().await;
        let start_time = std::time::Instant::now();

        let feeds = self
            .feed_repo
            .find_all()
            .await
            .map_err(|e| NewsServiceError::Dependency(e.to_string()))?;

        let existing = self.news_repo.find_all().await;
        let mut known_links: HashSet<String> =
            existing.iter().map(|item| item.link.clone()).collect();

        tracing::info!(
            feed_count = feeds.len(),
            existing_items = existing.len(),
            "Starting news collection"
        );

        let mut new_items = Vec::new();
        let mut failed_feeds = 0;

        for feed in &feeds {
            let fetched = match self.fetcher.fetch(&feed.url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    failed_feeds += 1;
                    tracing::warn!(
                        feed = %feed.name,
                        url = %feed.url,
                        error = %e,
                        "Error fetching feed, skipping"
                    );
                    continue;
                }
            };

            if fetched.entries.is_empty() {
                tracing::warn!(feed = %feed.name, url = %feed.url, "No entries for feed");
                continue;
            }

            let now = Utc::now();
            let before = new_items.len();

            for entry in fetched.entries {
                let Some(item) = NewsItem::from_entry(entry, feed, now) else {
                    tracing::debug!(feed = %feed.name, "Entry without link skipped");
                    continue;
                };
                if known_links.insert(item.link.clone()) {
                    new_items.push(item);
                }
            }

            tracing::debug!(
                feed = %feed.name,
                added = new_items.len() - before,
                "Feed processed"
            );
        }

        let added = new_items.len();
        let merged = merge_news(new_items, existing, MAX_NEWS_ITEMS);
        let stored = merged.len();

        self.news_repo
            .replace_all(merged)
            .await
            .map_err(|e| NewsServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            added = added,
            stored = stored,
            failed_feeds = failed_feeds,
            latency_ms = start_time.elapsed().as_millis(),
            "News collection completed"
        );

        Ok(added)
    }

    async fn list_news(&self) -> Vec<NewsItem> {
        self.news_repo.find_all().await
    }

    async fn search(&self, term: Option<&str>, limit: usize) -> Vec<NewsItem> {
        let items = self.news_repo.find_all().await;

        match term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                items
                    .into_iter()
                    .filter(|item| item.matches(&term))
                    .take(limit)
                    .collect()
            }
            None => items.into_iter().take(limit).collect(),
        }
    }
}

/// New items go ahead of existing ones, then a stable sort by `published`
/// (newest first) and truncation to `cap`. Ties keep new items first.
pub fn merge_news(new_items: Vec<NewsItem>, existing: Vec<NewsItem>, cap: usize) -> Vec<NewsItem> {
    let mut all = new_items;
    all.extend(existing);
    all.sort_by(|a, b| b.published.cmp(&a.published));
    all.truncate(cap);
    all
}
