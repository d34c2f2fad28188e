use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// The body of a successfully fetched HTML page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub body: String,
}

/// Narrow seam between the crawl engine and the HTTP transport.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<PageContent, FetchError>;
}

/// reqwest-backed fetcher. Only 2xx responses with an HTML content type
/// count as a successful fetch; everything else maps into [`FetchError`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(concat!("webmap/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<PageContent, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("text/html") {
            return Err(FetchError::NonHtmlContentType(content_type));
        }

        let body = response.text().await?;

        Ok(PageContent { body })
    }
}
