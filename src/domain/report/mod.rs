pub mod chart;
pub mod error;
pub mod model;
pub mod prompts;
pub mod service;

pub use chart::{extract_chart_data, SectorEntry, Sentiment};
pub use error::ReportServiceError;
pub use model::Report;
pub use service::{Analysis, ReportService, ReportServiceApi, MAX_REPORTS, NO_NEWS_SENTINEL};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Report with its chart data extracted
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    pub content: String,
    pub chart: Vec<SectorEntry>,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            chart: extract_chart_data(&report.content),
            date: report.date,
            timestamp: report.timestamp,
            content: report.content,
        }
    }
}
