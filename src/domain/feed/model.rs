use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered feed source. `url` is the logical key but duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    pub category: FeedCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedCategory {
    Economy,
    Domestic,
    Global,
    Sector,
}

impl fmt::Display for FeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedCategory::Economy => "Economy",
            FeedCategory::Domestic => "Domestic",
            FeedCategory::Global => "Global",
            FeedCategory::Sector => "Sector",
        };
        f.write_str(name)
    }
}

/// Curated feed suggestion offered by the admin "add feed" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPreset {
    pub name: String,
    pub url: String,
    pub category: FeedCategory,
}

/// Diagnostics for one registered feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedCheck {
    pub name: String,
    pub url: String,
    pub status: Option<u16>,
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
