use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use webmap_crawler::Sitemap;

/// Serializes the site map as an indented JSON array of page records, to
/// the given path or to stdout.
pub fn write_sitemap(sitemap: &Sitemap, output: Option<&Path>) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(sitemap).context("Failed to serialize site map")?;

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write site map to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
