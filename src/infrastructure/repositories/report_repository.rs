use crate::domain::report::Report;
use crate::error::AppResult;
use crate::infrastructure::storage::{JsonFile, REPORTS_FILE};
use std::path::Path;
use tokio::sync::Mutex;

pub struct ReportRepository {
    file: JsonFile<Vec<Report>>,
    write_lock: Mutex<()>,
}

impl ReportRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file: JsonFile::new(data_dir.join(REPORTS_FILE)),
            write_lock: Mutex::new(()),
        }
    }

    /// Reports newest first
    pub async fn find_all(&self) -> AppResult<Vec<Report>> {
        Ok(self.file.load_if_exists().await?.unwrap_or_default())
    }

    pub async fn find_latest(&self) -> AppResult<Option<Report>> {
        Ok(self.find_all().await?.into_iter().next())
    }

    /// Insert at the front and keep at most `max_reports` entries
    pub async fn prepend(&self, report: Report, max_reports: usize) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut reports = self.find_all().await?;
        reports.insert(0, report);
        reports.truncate(max_reports);
        self.file.save(&reports).await?;

        Ok(())
    }
}
