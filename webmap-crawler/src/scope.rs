use url::Url;

/// Whether a discovered URL is eligible for further traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    InDomain,
    OutOfDomain,
}

/// Classifies a candidate URL against the crawl's root host.
///
/// The rule is exact host equality: subdomains are distinct domains, so
/// `blog.example.org` is out of scope for a crawl rooted at `example.org`.
/// The `url` crate lowercases hosts during parsing, which handles casing.
pub fn classify(candidate: &Url, root_host: &str) -> Scope {
    match candidate.host_str() {
        Some(host) if host == root_host => Scope::InDomain,
        _ => Scope::OutOfDomain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_host_is_in_domain() {
        assert_eq!(
            classify(&url("https://example.org/about/"), "example.org"),
            Scope::InDomain
        );
    }

    #[test]
    fn test_scheme_does_not_matter() {
        assert_eq!(
            classify(&url("http://example.org/"), "example.org"),
            Scope::InDomain
        );
    }

    #[test]
    fn test_host_casing_is_normalized_by_parsing() {
        assert_eq!(
            classify(&url("https://EXAMPLE.org/"), "example.org"),
            Scope::InDomain
        );
    }

    #[test]
    fn test_other_host_is_out_of_domain() {
        assert_eq!(
            classify(&url("https://other.com/"), "example.org"),
            Scope::OutOfDomain
        );
    }

    #[test]
    fn test_subdomains_are_distinct() {
        assert_eq!(
            classify(&url("https://blog.example.org/"), "example.org"),
            Scope::OutOfDomain
        );
        // Nor does a suffix match the other way around.
        assert_eq!(
            classify(&url("https://example.org/"), "blog.example.org"),
            Scope::OutOfDomain
        );
    }

    #[test]
    fn test_www_is_a_distinct_host() {
        assert_eq!(
            classify(&url("https://www.example.org/"), "example.org"),
            Scope::OutOfDomain
        );
    }
}
