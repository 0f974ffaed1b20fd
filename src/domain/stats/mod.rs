pub mod service;

pub use service::{StatsService, StatsServiceApi};

use serde::{Deserialize, Serialize};

/// Persisted site counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub visitors: u64,
}

/// Response for GET /api/stats
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub visitors: u64,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            visitors: stats.visitors,
        }
    }
}
