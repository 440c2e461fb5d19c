use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
