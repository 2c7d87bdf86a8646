use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Layout Error: {0}")]
    Layout(String),

    #[error("Protocol Error: {0}")]
    Protocol(String),
}

pub type CfResult<T> = Result<T, CueForgeError>;
