use std::fmt;

#[derive(Debug)]
pub enum AppError {
    UnsupportedFormat(String),
    Decode(String),
    Schema(String),
    Validation(String),
    Config(String),
    Api(String),
    IoError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Schema(msg) => write!(f, "Schema error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Api(msg) => write!(f, "API error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
