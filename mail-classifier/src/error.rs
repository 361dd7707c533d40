use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Linguistic resource unavailable: {0}")]
    Resource(String),

    #[error("Malformed resource {file} at line {line}")]
    MalformedResource { file: String, line: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
