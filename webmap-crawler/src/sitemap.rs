use serde::Serialize;
use url::Url;

/// One crawled page: its URL, its outgoing non-image links, and its image
/// references. Links and images are absolute, deduplicated, and keep their
/// first-seen order on the page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub page_url: Url,
    pub links: Vec<Url>,
    pub images: Vec<Url>,
}

/// Append-only collection of page records in the order pages finished
/// processing. Serializes as a JSON array of records.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Sitemap {
    records: Vec<PageRecord>,
}

impl FromIterator<PageRecord> for Sitemap {
    fn from_iter<I: IntoIterator<Item = PageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Sitemap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PageRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut sitemap = Sitemap::new();
        sitemap.append(PageRecord {
            page_url: url("https://example.org/"),
            links: vec![],
            images: vec![],
        });
        sitemap.append(PageRecord {
            page_url: url("https://example.org/about/"),
            links: vec![],
            images: vec![],
        });

        let urls: Vec<_> = sitemap
            .records()
            .iter()
            .map(|r| r.page_url.as_str())
            .collect();
        assert_eq!(urls, vec!["https://example.org/", "https://example.org/about/"]);
    }

    #[test]
    fn test_serializes_as_array_of_objects() {
        let mut sitemap = Sitemap::new();
        sitemap.append(PageRecord {
            page_url: url("https://example.org/"),
            links: vec![url("https://example.org/about/"), url("https://other.com/")],
            images: vec![url("https://example.org/logo.png")],
        });

        let json = serde_json::to_value(&sitemap).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["page_url"], "https://example.org/");
        assert_eq!(
            json[0]["links"],
            serde_json::json!(["https://example.org/about/", "https://other.com/"])
        );
        assert_eq!(
            json[0]["images"],
            serde_json::json!(["https://example.org/logo.png"])
        );
    }

    #[test]
    fn test_empty_page_keeps_empty_sequences() {
        let mut sitemap = Sitemap::new();
        sitemap.append(PageRecord {
            page_url: url("https://example.org/blank"),
            links: vec![],
            images: vec![],
        });

        let json = serde_json::to_value(&sitemap).unwrap();
        assert_eq!(json[0]["links"], serde_json::json!([]));
        assert_eq!(json[0]["images"], serde_json::json!([]));
    }
}
