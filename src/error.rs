use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfectCvError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Not logged in. Run `perfect-cv register` first")]
    NotLoggedIn,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] perfect_cv_common::Error),
}

impl From<perfect_cv_common::ApiError> for PerfectCvError {
    fn from(e: perfect_cv_common::ApiError) -> Self {
        PerfectCvError::Common(e.into())
    }
}

impl From<perfect_cv_common::ValidationError> for PerfectCvError {
    fn from(e: perfect_cv_common::ValidationError) -> Self {
        PerfectCvError::Common(e.into())
    }
}

pub type Result<T> = std::result::Result<T, PerfectCvError>;
