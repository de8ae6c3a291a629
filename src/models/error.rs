use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ComicError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Comic not found")]
    ComicNotFound,
    #[error("Unexpected status code {0}")]
    UnexpectedStatus(StatusCode),
}
