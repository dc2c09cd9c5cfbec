use ddl_syntax::DdlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the dump script: {0}")]
    Ddl(#[from] DdlError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
