use super::Stats;
use crate::infrastructure::repositories::StatsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct StatsService {
    stats_repo: Arc<StatsRepository>,
}

impl StatsService {
    pub fn new(stats_repo: Arc<StatsRepository>) -> Self {
        Self { stats_repo }
    }
}

#[async_trait]
pub trait StatsServiceApi: Send + Sync {
    /// Count one visit and return the new total.
    ///
    /// A failed write is logged and the unchanged total is returned.
    async fn increment(&self) -> u64;

    async fn read(&self) -> u64;

    async fn stats(&self) -> Stats;
}

#[async_trait]
impl StatsServiceApi for StatsService {
    async fn increment(&self) -> u64 {
        match self.stats_repo.increment_visitors().await {
            Ok(visitors) => {
                tracing::debug!(visitors = visitors, "Visitor counted");
                visitors
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist visitor count");
                self.read().await
            }
        }
    }

    async fn read(&self) -> u64 {
        self.stats_repo.get().await.visitors
    }

    async fn stats(&self) -> Stats {
        self.stats_repo.get().await
    }
}
