pub mod feed_fetcher;
pub mod feed_presets_repository;
pub mod feed_repository;
pub mod http_feed_fetcher;
pub mod news_repository;
pub mod openai_text_generator;
pub mod report_repository;
pub mod stats_repository;
pub mod text_generator;

pub use feed_fetcher::{FeedEntry, FeedFetcher, FetchError, FetchedFeed};
pub use feed_presets_repository::HardcodedFeedPresetsRepository;
pub use feed_repository::FeedRepository;
pub use http_feed_fetcher::HttpFeedFetcher;
pub use news_repository::NewsRepository;
pub use openai_text_generator::OpenAiTextGenerator;
pub use report_repository::ReportRepository;
pub use stats_repository::StatsRepository;
pub use text_generator::TextGenerator;
