use async_trait::async_trait;

/// One entry as it appears in the source document. Every field is best-effort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    /// Raw publication date string, left for the caller to interpret
    pub published: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FetchedFeed {
    pub status: u16,
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, connection, TLS or timeout failure
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Body was neither RSS nor Atom
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Retrieves and parses an RSS or Atom document.
///
/// Abstracts the transport so ingestion can be exercised without a network.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedFeed, FetchError>;
}
