use crate::error::{AppError, AppResult};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub const FEEDS_FILE: &str = "feeds.json";
pub const NEWS_FILE: &str = "news.json";
pub const REPORTS_FILE: &str = "reports.json";
pub const STATS_FILE: &str = "stats.json";

/// A single pretty-printed JSON document on disk holding a value of type `T`.
///
/// Every save rewrites the whole file. Callers that do read-modify-write cycles
/// are expected to serialize them themselves.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file. Missing files surface as `AppError::Storage`,
    /// malformed content as `AppError::Serialization`.
    pub async fn load(&self) -> AppResult<T> {
        let bytes = tokio::fs::read(&self.path).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// Like `load`, but a missing file is `Ok(None)` rather than an error.
    pub async fn load_if_exists(&self) -> AppResult<Option<T>> {
        match self.load().await {
            Ok(value) => Ok(Some(value)),
            Err(AppError::Storage(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn save(&self, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::debug!(path = %self.path.display(), "JSON file written");
        Ok(())
    }
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Load the file, falling back to `T::default()` when it is missing or corrupt.
    pub async fn load_or_default(&self) -> T {
        match self.load().await {
            Ok(value) => value,
            Err(AppError::Storage(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "JSON file missing, using default");
                T::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to load JSON file, using default"
                );
                T::default()
            }
        }
    }
}

/// Create the data directory and seed the files every store expects to find.
///
/// `reports.json` is left to be created by the first saved report.
pub async fn ensure_data_dir(dir: &Path) -> AppResult<()> {
    tokio::fs::create_dir_all(dir).await?;

    let seeds = [
        (FEEDS_FILE, json!([])),
        (NEWS_FILE, json!([])),
        (STATS_FILE, json!({ "visitors": 0 })),
    ];

    for (name, seed) in seeds {
        let path = dir.join(name);
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, serde_json::to_vec_pretty(&seed)?).await?;
            tracing::info!(path = %path.display(), "Seeded data file");
        }
    }

    Ok(())
}

/// Readiness probe for the data directory.
pub async fn check_data_dir(dir: &Path) -> AppResult<bool> {
    let metadata = tokio::fs::metadata(dir).await?;
    Ok(metadata.is_dir())
}
