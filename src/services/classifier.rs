//! Cookie Classifier for PrivCrawler.
//!
//! Derives the facet labels (first/third-party, session/persistent,
//! SameSite bucket) for one raw cookie against the URL that was visited.

use url::Url;

use crate::types::cookie::{CookieRecord, RawCookie, SameSite};

/// Trait defining cookie classification operations.
pub trait CookieClassifierTrait {
    fn classify(&self, raw: &RawCookie, visited_url: &str) -> CookieRecord;
    fn is_first_party(&self, cookie_domain: &str, visited_url: &str) -> bool;
}

/// Pure, deterministic classifier. No side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieClassifier;

impl CookieClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl CookieClassifierTrait for CookieClassifier {
    /// First-party test: strip a leading "." from the cookie domain, then
    /// the cookie is first-party if the visited host is a prefix of the
    /// cleaned domain, or the cleaned domain is a suffix of the host.
    ///
    /// This is a loose string-containment heuristic, not a public-suffix
    /// comparison: unrelated domains that share a substring (e.g. `ple.com`
    /// against a visit to `example.com`) are misclassified as first-party.
    /// Kept as-is for compatibility with existing run logs.
    ///
    /// Returns false when the visited URL cannot be parsed or has no host.
    fn is_first_party(&self, cookie_domain: &str, visited_url: &str) -> bool {
        let host = match Url::parse(visited_url) {
            Ok(parsed) => match parsed.host_str() {
                Some(h) => h.to_string(),
                None => return false,
            },
            Err(_) => return false,
        };

        let clean_domain = cookie_domain.strip_prefix('.').unwrap_or(cookie_domain);

        clean_domain.starts_with(&host) || host.ends_with(clean_domain)
    }

    /// Classifies one raw cookie. A URL parse failure only affects the
    /// first-party facet (defaults to false); everything else is still
    /// derived normally.
    fn classify(&self, raw: &RawCookie, visited_url: &str) -> CookieRecord {
        CookieRecord {
            name: raw.name.clone(),
            value: raw.value.clone(),
            domain: raw.domain.clone(),
            path: raw.path.clone(),
            expires: raw.expires,
            http_only: raw.http_only,
            secure: raw.secure,
            same_site: SameSite::from_raw(&raw.same_site),
            is_first_party: self.is_first_party(&raw.domain, visited_url),
        }
    }
}
