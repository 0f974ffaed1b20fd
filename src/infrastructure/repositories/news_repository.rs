use crate::domain::news::NewsItem;
use crate::error::AppResult;
use crate::infrastructure::storage::{JsonFile, NEWS_FILE};
use serde_json::Value;
use std::path::Path;
use tokio::sync::Mutex;

pub struct NewsRepository {
    file: JsonFile<Vec<NewsItem>>,
    records: JsonFile<Vec<Value>>,
    write_lock: Mutex<()>,
}

impl NewsRepository {
    pub fn new(data_dir: &Path) -> Self {
        let path = data_dir.join(NEWS_FILE);
        Self {
            file: JsonFile::new(path.clone()),
            records: JsonFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    /// All stored items in stored order. A missing or corrupt file reads as empty.
    ///
    /// Records are decoded one by one; a record that does not decode is dropped
    /// with a warning and the rest are kept.
    pub async fn find_all(&self) -> Vec<NewsItem> {
        self.records
            .load_or_default()
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(index = index, error = %e, "Skipping unreadable news record");
                    None
                }
            })
            .collect()
    }

    /// Replace the whole collection
    pub async fn replace_all(&self, items: Vec<NewsItem>) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.file.save(&items).await
    }
}
