//! Metrics Accumulator for PrivCrawler.
//!
//! Mutable per-run counter set. Each run owns a private accumulator, feeds
//! it one classified cookie at a time, and discards it once the report has
//! been synthesized. Not thread-safe, and does not need to be.

use crate::types::cookie::{CookieRecord, SameSite};
use crate::types::metrics::PrivacyMetrics;

/// Accumulates `PrivacyMetrics` for a single crawl run.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    metrics: PrivacyMetrics,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one classified cookie, incrementing exactly one counter in
    /// each of the five pair families. Must be called once per cookie;
    /// there is no undo.
    pub fn observe(&mut self, cookie: &CookieRecord) {
        let m = &mut self.metrics;

        m.total_cookies += 1;

        if cookie.is_first_party {
            m.first_party += 1;
        } else {
            m.third_party += 1;
        }

        if cookie.secure {
            m.secure += 1;
        } else {
            m.not_secure += 1;
        }

        if cookie.http_only {
            m.http_only += 1;
        } else {
            m.not_http_only += 1;
        }

        match cookie.same_site {
            SameSite::Strict => m.same_site_strict += 1,
            SameSite::Lax => m.same_site_lax += 1,
            SameSite::None => m.same_site_none += 1,
            SameSite::Unset => m.same_site_unset += 1,
        }

        if cookie.is_session() {
            m.session_cookies += 1;
        } else {
            m.persistent_cookies += 1;
        }

        if cookie.path != "/" {
            m.suspicious_paths.push(cookie.path.clone());
        }
    }

    /// Current counters without consuming the accumulator.
    pub fn metrics(&self) -> &PrivacyMetrics {
        &self.metrics
    }

    /// Consumes the accumulator and yields the final snapshot.
    pub fn finish(self) -> PrivacyMetrics {
        self.metrics
    }
}
