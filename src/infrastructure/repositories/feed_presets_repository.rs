use crate::domain::feed::{FeedCategory, FeedPreset, FeedPresetsRepository};
use std::sync::LazyLock;

static PRESETS: LazyLock<Vec<FeedPreset>> = LazyLock::new(|| {
    vec![
        FeedPreset {
            name: "Naver Finance (via Google News)".to_string(),
            url: "https://news.google.com/rss/search?q=site:finance.naver.com&hl=ko&gl=KR&ceid=KR:ko".to_string(),
            category: FeedCategory::Domestic,
        },
        FeedPreset {
            name: "Maeil Business (all)".to_string(),
            url: "https://www.mk.co.kr/rss/30000001/".to_string(),
            category: FeedCategory::Economy,
        },
        FeedPreset {
            name: "Hankyung (securities/finance)".to_string(),
            url: "https://www.hankyung.com/feed/finance".to_string(),
            category: FeedCategory::Domestic,
        },
        FeedPreset {
            name: "Google Finance (Korea)".to_string(),
            url: "https://news.google.com/rss/topics/CAAqJQgKIh9DQkFTRVFvSUwyMHZNRGx6TVdZU0FtdHZHZ0pMVWlnQVAB?hl=ko&gl=KR&ceid=KR%3Ako".to_string(),
            category: FeedCategory::Domestic,
        },
        FeedPreset {
            name: "Google Finance (US/global)".to_string(),
            url: "https://news.google.com/rss/topics/CAAqJggKIiBDQkFTRWvfSkwyX3qAmDn2BzF4QAxhWjFfM180XzVykAQA?hl=en-US&gl=US&ceid=US:en".to_string(),
            category: FeedCategory::Global,
        },
        FeedPreset {
            name: "TechCrunch (tech/AI)".to_string(),
            url: "https://techcrunch.com/feed/".to_string(),
            category: FeedCategory::Sector,
        },
    ]
});

/// Curated presets compiled into the binary
pub struct HardcodedFeedPresetsRepository;

impl HardcodedFeedPresetsRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardcodedFeedPresetsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedPresetsRepository for HardcodedFeedPresetsRepository {
    fn get_all_presets(&self) -> Vec<FeedPreset> {
        PRESETS.clone()
    }
}
