use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Saved analysis, stamped with local wall-clock date and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    pub content: String,
}

impl Report {
    pub fn new(content: String) -> Self {
        let now = Local::now().naive_local();
        Self {
            date: now.date(),
            timestamp: now,
            content,
        }
    }
}
