use thiserror::Error;

/// Why a single page fetch failed. Always recoverable: the crawl drops the
/// entry and moves on.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("not an HTML document: {0}")]
    NonHtmlContentType(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::ConnectionFailed(err.to_string())
        }
    }
}

/// Errors that abort a crawl before it starts.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid root URL: {0}")]
    InvalidRootUrl(String),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
