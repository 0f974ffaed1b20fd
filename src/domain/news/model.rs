use super::published;
use crate::domain::feed::{FeedCategory, FeedSource};
use crate::infrastructure::repositories::FeedEntry;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Article record, unique by `link`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub summary: String,
    #[serde(with = "published::flexible")]
    pub published: DateTime<Utc>,
    pub source: String,
    pub category: FeedCategory,
    #[serde(with = "published::flexible")]
    pub fetched_at: DateTime<Utc>,
}

impl NewsItem {
    /// Build a record from a parsed entry. Returns `None` for entries without a link.
    pub fn from_entry(entry: FeedEntry, feed: &FeedSource, now: DateTime<Utc>) -> Option<Self> {
        let link = entry.link?;
        let published = published::resolve_published(entry.published.as_deref(), now);

        Some(Self {
            title: entry.title.unwrap_or_else(|| "Untitled".to_string()),
            link,
            summary: entry.summary.unwrap_or_default(),
            published,
            source: feed.name.clone(),
            category: feed.category,
            fetched_at: now,
        })
    }

    /// Case-insensitive substring match against title and summary.
    /// `term` must already be lowercased.
    pub fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.summary.to_lowercase().contains(term)
    }

    /// Plain-text summary, HTML stripped and whitespace collapsed, cut to `max_chars`.
    pub fn summary_preview(&self, max_chars: usize) -> String {
        if self.summary.trim().is_empty() {
            return String::new();
        }

        let plain_text = html2text::from_read(self.summary.as_bytes(), usize::MAX);
        let normalized = WHITESPACE.replace_all(&plain_text, " ");
        let normalized = normalized.trim();

        if normalized.chars().count() > max_chars {
            let cut: String = normalized.chars().take(max_chars).collect();
            format!("{}...", cut)
        } else {
            normalized.to_string()
        }
    }
}
