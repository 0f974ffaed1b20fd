use chrono::{DateTime, Utc};
use market_briefing::domain::feed::FeedCategory;
use market_briefing::domain::news::NewsItem;
use market_briefing::infrastructure::storage::{JsonFile, NEWS_FILE};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Direct access to the data directory behind the running server
pub struct TestFixtures {
    data_dir: PathBuf,
}

impl TestFixtures {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub async fn seed_news(&self, items: &[NewsItem]) {
        JsonFile::<Vec<NewsItem>>::new(self.data_dir.join(NEWS_FILE))
            .save(&items.to_vec())
            .await
            .expect("Failed to seed news");
    }

    pub async fn stored_news(&self) -> Vec<NewsItem> {
        JsonFile::<Vec<NewsItem>>::new(self.data_dir.join(NEWS_FILE))
            .load()
            .await
            .expect("Failed to read news")
    }

    pub fn read_json(&self, file: &str) -> Option<Value> {
        let raw = std::fs::read_to_string(self.data_dir.join(file)).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

pub fn news_item(title: &str, published: DateTime<Utc>) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        link: format!("https://news.example.com/{}", title.replace(' ', "-")),
        summary: format!("<p>{} in detail</p>", title),
        published,
        source: "Wire".to_string(),
        category: FeedCategory::Economy,
        fetched_at: published,
    }
}

/// RSS 2.0 document with `(title, link, pubDate)` items
pub fn rss_feed(items: &[(&str, &str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(title, link, published)| {
            format!(
                "<item><title>{}</title><link>{}</link><description>About {}</description><pubDate>{}</pubDate></item>",
                title, link, title, published
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Test feed</title><link>https://feed.example.com</link><description>Test</description>{}</channel></rss>"#,
        items
    )
}

/// OpenAI-style chat completion body
pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub const REPORT_WITH_CHART: &str = "# Market briefing\n\n## Sector forecast\n* Chips up\n\n```json\n[\n  {\"sector\": \"Semiconductors\", \"sentiment\": \"bullish\", \"score\": 8, \"reason\": \"AI demand\", \"tickers\": [\"Samsung Electronics\"]},\n  {\"sector\": \"Batteries\", \"sentiment\": \"bearish\", \"score\": 3, \"reason\": \"EV slowdown\", \"tickers\": []}\n]\n```\n";
