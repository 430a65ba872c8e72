use serde::{Deserialize, Serialize};

use super::config::Browser;
use super::metrics::PrivacyMetrics;

/// Cumulative counters for one browser across every run found in the
/// shared log. Same shape as `PrivacyMetrics` (suspicious paths reduced
/// to a count) plus the number of reports that contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserTotals {
    pub browser: Browser,
    pub total_reports: u64,
    pub total_cookies: u64,
    pub first_party: u64,
    pub third_party: u64,
    pub secure: u64,
    pub not_secure: u64,
    pub http_only: u64,
    pub not_http_only: u64,
    pub same_site_strict: u64,
    pub same_site_lax: u64,
    pub same_site_none: u64,
    pub same_site_unset: u64,
    pub session_cookies: u64,
    pub persistent_cookies: u64,
    pub suspicious_paths: u64,
}

impl BrowserTotals {
    /// Fresh zeroed totals for a browser.
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            total_reports: 0,
            total_cookies: 0,
            first_party: 0,
            third_party: 0,
            secure: 0,
            not_secure: 0,
            http_only: 0,
            not_http_only: 0,
            same_site_strict: 0,
            same_site_lax: 0,
            same_site_none: 0,
            same_site_unset: 0,
            session_cookies: 0,
            persistent_cookies: 0,
            suspicious_paths: 0,
        }
    }

    /// Folds one run's metrics into the totals and counts the report.
    pub fn add_run(&mut self, metrics: &PrivacyMetrics) {
        self.total_reports += 1;
        self.total_cookies += metrics.total_cookies;
        self.first_party += metrics.first_party;
        self.third_party += metrics.third_party;
        self.secure += metrics.secure;
        self.not_secure += metrics.not_secure;
        self.http_only += metrics.http_only;
        self.not_http_only += metrics.not_http_only;
        self.same_site_strict += metrics.same_site_strict;
        self.same_site_lax += metrics.same_site_lax;
        self.same_site_none += metrics.same_site_none;
        self.same_site_unset += metrics.same_site_unset;
        self.session_cookies += metrics.session_cookies;
        self.persistent_cookies += metrics.persistent_cookies;
        self.suspicious_paths += metrics.suspicious_paths.len() as u64;
    }
}

/// The criterion a ranking is sorted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingCriterion {
    /// Ascending by total cookies: fewer cookies ranks higher.
    FewestCookies,
    /// Ascending by third-party cookies.
    FewestThirdParty,
    /// Descending by Secure-flag cookies.
    MostSecure,
}

/// One row of the composite scoreboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub browser: Browser,
    pub total_cookies: u64,
    pub third_party: u64,
    pub score: u64,
}

/// The three rankings, the composite scoreboard, and the designated winner.
/// Never persisted as state: rebuilt from the aggregated totals on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingReport {
    pub fewest_cookies: Vec<BrowserTotals>,
    pub fewest_third_party: Vec<BrowserTotals>,
    pub most_secure: Vec<BrowserTotals>,
    pub scoreboard: Vec<ScoreEntry>,
    pub winner: Option<Browser>,
}
