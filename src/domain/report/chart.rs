use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[serde(alias = "맑음")]
    Bullish,
    #[serde(alias = "흐림")]
    Bearish,
}

/// One sector sentiment record from the report's trailing JSON block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorEntry {
    pub sector: String,
    pub sentiment: Sentiment,
    /// Impact strength, 1..=10
    pub score: u8,
    pub reason: String,
    #[serde(default)]
    pub tickers: Vec<String>,
}

impl SectorEntry {
    fn has_valid_score(&self) -> bool {
        (1..=10).contains(&self.score)
    }
}

/// Parse the first ```json fenced block of `report_text` into sector entries.
///
/// Returns an empty list when there is no block, the JSON does not match
/// the expected shape, or any score falls outside 1..=10.
pub fn extract_chart_data(report_text: &str) -> Vec<SectorEntry> {
    let Some(block) = JSON_FENCE.captures(report_text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<SectorEntry>>(block.as_str()) {
        Ok(entries) if entries.iter().all(SectorEntry::has_valid_score) => entries,
        Ok(_) => {
            tracing::warn!("Chart data has a score outside 1..=10, ignoring");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed chart data in report");
            Vec::new()
        }
    }
}
