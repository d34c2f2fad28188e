use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use webmap::output::write_sitemap;
use webmap_crawler::Crawler;

mod arguments;

use arguments::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for the JSON document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut crawler = Crawler::new()
        .with_max_depth(args.max_depth)
        .with_workers(args.workers)
        .with_timeout(args.timeout);

    let spinner = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting crawl...");
        Some(pb)
    };

    if let Some(ref pb) = spinner {
        let pb = pb.clone();
        crawler = crawler.with_progress_callback(Arc::new(move |count, url| {
            pb.set_message(format!("{} pages mapped, last: {}", count, url));
        }));
    }

    // Ctrl-C stops dequeuing; the partial site map is still written.
    let cancel = crawler.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nInterrupted, finalizing partial site map...");
            cancel.cancel();
        }
    });

    let sitemap = crawler
        .crawl(args.url.as_str())
        .await
        .with_context(|| format!("Failed to crawl {}", args.url))?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    write_sitemap(&sitemap, args.output.as_deref())?;

    if let Some(ref path) = args.output {
        eprintln!(
            "Site map with {} pages written to {}",
            sitemap.len(),
            path.display()
        );
    }

    Ok(())
}
