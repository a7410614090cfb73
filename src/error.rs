/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No API key configured")]
    MissingCredential,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error came out of a recommendation request
    ///
    /// Transport failures, upstream rejections (including a bad API key) and
    /// unparsable model output all belong here. The shell reports every one of
    /// them with the same generic message.
    pub fn is_recommendation_failure(&self) -> bool {
        matches!(
            self,
            AppError::HttpClient(_) | AppError::ExternalApi(_) | AppError::MalformedResponse(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
