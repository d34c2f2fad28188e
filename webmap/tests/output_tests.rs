use std::fs;
use tempfile::NamedTempFile;
use url::Url;
use webmap::output::write_sitemap;
use webmap_crawler::{PageRecord, Sitemap};

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn test_write_sitemap_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let sitemap: Sitemap = [
        PageRecord {
            page_url: url("https://example.org/"),
            links: vec![
                url("https://example.org/about/"),
                url("https://other.com/"),
            ],
            images: vec![url("https://example.org/logo.png")],
        },
        PageRecord {
            page_url: url("https://example.org/about/"),
            links: vec![],
            images: vec![],
        },
    ]
    .into_iter()
    .collect();

    let file = NamedTempFile::new()?;
    write_sitemap(&sitemap, Some(file.path()))?;

    let written = fs::read_to_string(file.path())?;
    let parsed: serde_json::Value = serde_json::from_str(&written)?;

    let pages = parsed.as_array().expect("site map should be a JSON array");
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["page_url"], "https://example.org/");
    assert_eq!(
        pages[0]["links"],
        serde_json::json!(["https://example.org/about/", "https://other.com/"])
    );
    assert_eq!(
        pages[0]["images"],
        serde_json::json!(["https://example.org/logo.png"])
    );
    assert_eq!(pages[1]["links"], serde_json::json!([]));

    // Pretty-printed, as the output is meant to be read by humans too.
    assert!(written.contains('\n'));

    Ok(())
}

#[test]
fn test_write_empty_sitemap() -> Result<(), Box<dyn std::error::Error>> {
    let sitemap = Sitemap::new();

    let file = NamedTempFile::new()?;
    write_sitemap(&sitemap, Some(file.path()))?;

    let written = fs::read_to_string(file.path())?;
    assert_eq!(written.trim(), "[]");

    Ok(())
}
