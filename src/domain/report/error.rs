use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("report generation is not configured")]
    GeneratorUnavailable,
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ReportServiceError {
    fn from(err: AppError) -> Self {
        ReportServiceError::Dependency(err.to_string())
    }
}

impl From<ReportServiceError> for AppError {
    fn from(err: ReportServiceError) -> Self {
        match err {
            ReportServiceError::GeneratorUnavailable => AppError::ServiceUnavailable(
                "Report generation requires LLM_API_KEY".to_string(),
            ),
            ReportServiceError::Dependency(msg) => AppError::Internal(msg),
            ReportServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
