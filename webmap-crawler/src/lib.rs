pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frontier;
pub mod scope;
pub mod sitemap;

pub use crawler::{CancelHandle, Crawler, ProgressCallback};
pub use error::{CrawlError, FetchError};
pub use fetch::{Fetcher, HttpFetcher, PageContent};
pub use sitemap::{PageRecord, Sitemap};
