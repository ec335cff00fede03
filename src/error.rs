use std::path::PathBuf;
use thiserror::Error;

/// get-quote error types
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Usage: {program} <file_name>\nYou must provide a file name {extension}")]
    MissingParameter { program: String, extension: String },

    #[error("The file {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error opening the file: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The file {} contains no quotes", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for get-quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;
