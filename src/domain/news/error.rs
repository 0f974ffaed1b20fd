use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for NewsServiceError {
    fn from(err: AppError) -> Self {
        NewsServiceError::Dependency(err.to_string())
    }
}

impl From<NewsServiceError> for AppError {
    fn from(err: NewsServiceError) -> Self {
        match err {
            NewsServiceError::Dependency(msg) => AppError::Internal(msg),
            NewsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
