use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Builds a JSON site map of a domain: crawls breadth-first from the root
/// URL, staying on its host, and records each page's links and images.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root URL to crawl (absolute, with scheme)
    pub url: Url,

    /// Maximum traversal depth; 0 crawls only the root page
    #[arg(short = 'd', long, default_value_t = 3)]
    pub max_depth: usize,

    /// Number of concurrent page fetches
    #[arg(short = 't', long, default_value_t = 10)]
    pub workers: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Write the site map to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}
