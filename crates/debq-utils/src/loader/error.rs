use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Invalid URL: {0}")]
    InvalidURL(String),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
