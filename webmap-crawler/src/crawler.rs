use crate::error::{CrawlError, Result};
use crate::extract;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::frontier::{Frontier, FrontierEntry};
use crate::scope::{self, Scope};
use crate::sitemap::{PageRecord, Sitemap};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};
use url::Url;

/// Called after each page is recorded with the running page count and the
/// page's URL.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Clonable handle that requests early termination of a running crawl.
/// Cancellation is not an error: the crawl stops dequeuing, abandons
/// in-flight fetches, and returns the records completed so far.
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// One crawl session: frontier, visited set and sitemap live for a single
/// `crawl` call; the builder fields configure every run the same way.
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    max_depth: usize,
    workers: usize,
    cancelled: Arc<AtomicBool>,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
            max_depth: 3,
            workers: 10,
            cancelled: Arc::new(AtomicBool::new(false)),
            progress_callback: None,
        }
    }

    /// Replaces the default fetcher with one using the given request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.fetcher = Arc::new(HttpFetcher::with_timeout(timeout_secs));
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Upper bound on concurrent in-flight fetches.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            flag: self.cancelled.clone(),
        }
    }

    /// Crawls from `root`, visiting in-domain pages up to the configured
    /// depth, and returns the finalized sitemap. Only an invalid root URL is
    /// fatal; individual page failures are logged and skipped.
    pub async fn crawl(&self, root: &str) -> Result<Sitemap> {
        let mut root_url = Url::parse(root)
            .map_err(|e| CrawlError::InvalidRootUrl(format!("{}: {}", root, e)))?;
        let root_host = root_url
            .host_str()
            .ok_or_else(|| CrawlError::InvalidRootUrl(format!("{}: no host", root)))?
            .to_string();
        root_url.set_fragment(None);

        info!(
            "Starting crawl of {} (max depth {}, {} workers)",
            root_url, self.max_depth, self.workers
        );

        let frontier = Frontier::new();
        frontier.offer(FrontierEntry {
            url: root_url,
            depth: 0,
        });

        let mut sitemap = Sitemap::new();

        // Drain the frontier one depth level at a time. Everything queued at
        // the top of this loop shares one depth, because new discoveries are
        // only offered at depth+1 while the current level is in flight.
        'crawl: loop {
            if self.cancelled.load(Ordering::Relaxed) {
                info!("Crawl cancelled, finalizing partial sitemap");
                break;
            }

            let mut level = Vec::new();
            while let Some(entry) = frontier.take() {
                level.push(entry);
            }
            if level.is_empty() {
                break;
            }

            let depth = level[0].depth;
            debug!("Processing depth {} ({} pages)", depth, level.len());

            let fetcher = self.fetcher.clone();
            let mut completions = stream::iter(level)
                .map(|entry| {
                    let fetcher = fetcher.clone();
                    async move {
                        let result = fetcher.fetch(&entry.url).await;
                        (entry, result)
                    }
                })
                .buffer_unordered(self.workers);

            while let Some((entry, result)) = completions.next().await {
                if self.cancelled.load(Ordering::Relaxed) {
                    // Dropping the stream abandons the remaining fetches.
                    info!("Crawl cancelled, finalizing partial sitemap");
                    break 'crawl;
                }

                let content = match result {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("Skipping {}: {}", entry.url, e);
                        continue;
                    }
                };

                let extraction = extract::extract(&content.body, &entry.url);

                if entry.depth < self.max_depth {
                    for link in &extraction.links {
                        if scope::classify(link, &root_host) == Scope::InDomain {
                            frontier.offer(FrontierEntry {
                                url: link.clone(),
                                depth: entry.depth + 1,
                            });
                        }
                    }
                }

                let page_url = entry.url;
                sitemap.append(PageRecord {
                    page_url: page_url.clone(),
                    links: extraction.links,
                    images: extraction.images,
                });

                if let Some(ref callback) = self.progress_callback {
                    callback(sitemap.len(), page_url.into());
                }
            }
        }

        info!(
            "Crawl complete. {} pages recorded, {} URLs seen",
            sitemap.len(),
            frontier.visited_count()
        );
        Ok(sitemap)
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}
