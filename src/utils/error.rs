// src/utils/error.rs
use thiserror::Error;

// Errors raised while talking to the directory site
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Too many redirects while fetching {url}")]
    TooManyRedirects { url: String },

    #[error("Network request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    Http { url: String, status: reqwest::StatusCode },

    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Company '{company}' has no metadata block after its heading")]
    MissingMetadataBlock { company: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory interaction failed: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
