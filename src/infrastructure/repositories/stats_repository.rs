use crate::domain::stats::Stats;
use crate::error::AppResult;
use crate::infrastructure::storage::{JsonFile, STATS_FILE};
use std::path::Path;
use tokio::sync::Mutex;

pub struct StatsRepository {
    file: JsonFile<Stats>,
    write_lock: Mutex<()>,
}

impl StatsRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file: JsonFile::new(data_dir.join(STATS_FILE)),
            write_lock: Mutex::new(()),
        }
    }

    /// Current stats; an unreadable file counts as zero
    pub async fn get(&self) -> Stats {
        self.file.load_or_default().await
    }

    /// Read-modify-write of the visitor counter, returning the new value
    pub async fn increment_visitors(&self) -> AppResult<u64> {
        let _guard = self.write_lock.lock().await;

        let mut stats = self.get().await;
        stats.visitors += 1;
        self.file.save(&stats).await?;

        Ok(stats.visitors)
    }
}
