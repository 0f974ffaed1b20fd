use super::feed_fetcher::{FeedEntry, FeedFetcher, FetchError, FetchedFeed};
use async_trait::async_trait;
use std::time::Duration;

/// reqwest-backed fetcher that understands RSS 2.0 and Atom
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(format!("market-briefing/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedFeed, FetchError> {
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let entries = parse_feed(&bytes)?;

        tracing::debug!(
            url = url,
            status = status.as_u16(),
            body_size = bytes.len(),
            entries = entries.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Feed fetched"
        );

        Ok(FetchedFeed {
            status: status.as_u16(),
            entries,
        })
    }
}

/// Parse a feed body, trying RSS first and then Atom.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>, FetchError> {
    if let Ok(channel) = rss::Channel::read_from(bytes) {
        return Ok(entries_from_rss(&channel));
    }

    atom_syndication::Feed::read_from(bytes)
        .map(|feed| entries_from_atom(&feed))
        .map_err(|e| FetchError::Parse(e.to_string()))
}

fn entries_from_rss(channel: &rss::Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .map(|item| FeedEntry {
            title: non_empty(item.title()),
            link: non_empty(item.link()),
            summary: non_empty(item.description()),
            published: non_empty(item.pub_date()).or_else(|| {
                item.dublin_core_ext()
                    .and_then(|dc| dc.dates().first())
                    .and_then(|date| non_empty(Some(date.as_str())))
            }),
        })
        .collect()
}

fn entries_from_atom(feed: &atom_syndication::Feed) -> Vec<FeedEntry> {
    feed.entries()
        .iter()
        .map(|entry| {
            let link = entry
                .links()
                .iter()
                .find(|l| l.rel() == "alternate")
                .or_else(|| entry.links().first())
                .map(|l| l.href().to_string());

            let summary = entry
                .summary()
                .map(|s| s.as_str().to_string())
                .or_else(|| {
                    entry
                        .content()
                        .and_then(|c| c.value())
                        .map(|v| v.to_string())
                });

            FeedEntry {
                title: non_empty(Some(entry.title().as_str())),
                link,
                summary: summary.filter(|s| !s.trim().is_empty()),
                published: Some(
                    entry
                        .published()
                        .unwrap_or_else(|| entry.updated())
                        .to_rfc3339(),
                ),
            }
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
