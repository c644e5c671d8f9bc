use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SpeechServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SpeechServiceError::Invalid(msg),
            AppError::NotFound(msg) => SpeechServiceError::NotFound(msg),
            _ => SpeechServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::NotFound(msg) => AppError::NotFound(msg),
            SpeechServiceError::Dependency(msg) => AppError::Internal(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
