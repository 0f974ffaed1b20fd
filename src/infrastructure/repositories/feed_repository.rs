use crate::domain::feed::FeedSource;
use crate::error::AppResult;
use crate::infrastructure::storage::{JsonFile, FEEDS_FILE};
use std::path::Path;
use tokio::sync::Mutex;

pub struct FeedRepository {
    file: JsonFile<Vec<FeedSource>>,
    write_lock: Mutex<()>,
}

impl FeedRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file: JsonFile::new(data_dir.join(FEEDS_FILE)),
            write_lock: Mutex::new(()),
        }
    }

    /// Get all feeds in insertion order
    pub async fn find_all(&self) -> AppResult<Vec<FeedSource>> {
        Ok(self.file.load_if_exists().await?.unwrap_or_default())
    }

    /// Append a feed. Duplicate URLs are allowed.
    pub async fn create(&self, feed: FeedSource) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut feeds = self.find_all().await?;
        feeds.push(feed);
        self.file.save(&feeds).await?;

        Ok(())
    }

    /// Delete every feed with exactly this URL, returning how many were removed
    pub async fn delete_by_url(&self, url: &str) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;

        let mut feeds = self.find_all().await?;
        let before = feeds.len();
        feeds.retain(|f| f.url != url);
        self.file.save(&feeds).await?;

        Ok(before - feeds.len())
    }
}
