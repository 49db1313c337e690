//! Error types shared by the scraper, catalog loader and downloader

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Metadata file not found at {}. Run 'irsforms scrape' first", .0.display())]
    MetadataMissing(PathBuf),

    #[error("Failed to parse metadata file {}: {source}", .path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error (status {status_code}) for {url}")]
    HttpStatus { status_code: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
