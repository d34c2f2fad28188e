use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// File extensions treated as image references wherever they appear.
const IMAGE_EXTS: [&str; 4] = ["ico", "png", "jpg", "gif"];

/// Absolute link and image URLs referenced by one page, deduplicated in
/// first-seen document order.
#[derive(Debug, Default)]
pub struct Extraction {
    pub links: Vec<Url>,
    pub images: Vec<Url>,
}

/// Extracts outgoing links and image references from an HTML document,
/// resolving relative references against `base`. Malformed markup is not an
/// error: whatever html5ever recovers is used.
pub fn extract(html: &str, base: &Url) -> Extraction {
    let document = Html::parse_document(html);

    // One selector so iteration follows document order.
    let selector = Selector::parse("a[href], link[href], img[src]").unwrap();

    let mut extraction = Extraction::default();
    let mut seen_links = HashSet::new();
    let mut seen_images = HashSet::new();

    for element in document.select(&selector) {
        let is_img = element.value().name() == "img";
        let raw = if is_img {
            element.value().attr("src")
        } else {
            element.value().attr("href")
        };

        let Some(resolved) = raw.and_then(|r| resolve_url(base, r)) else {
            continue;
        };

        if is_img || is_image_url(&resolved) {
            if seen_images.insert(resolved.clone()) {
                extraction.images.push(resolved);
            }
        } else if seen_links.insert(resolved.clone()) {
            debug!("Found link: {}", resolved);
            extraction.links.push(resolved);
        }
    }

    extraction
}

/// Resolves an href/src against the page URL, dropping non-navigable
/// references and fragments.
fn resolve_url(base: &Url, raw: &str) -> Option<Url> {
    if raw.is_empty()
        || raw.starts_with("javascript:")
        || raw.starts_with("mailto:")
        || raw.starts_with("tel:")
        || raw.starts_with("data:")
        || raw.starts_with('#')
    {
        return None;
    }

    let mut resolved = base.join(raw).ok()?;
    resolved.set_fragment(None);

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    Some(resolved)
}

/// A URL whose path ends in a known image extension is an image reference.
pub fn is_image_url(url: &Url) -> bool {
    let path = url.path();
    match path.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
