//! Log Aggregator for PrivCrawler.
//!
//! Re-scans the shared run log end to end and rebuilds per-browser
//! cumulative totals from scratch. The aggregator holds no state between
//! scans and has no dedup memory: scanning the same log twice doubles the
//! totals, so the caller must scan each distinct log exactly once, after
//! every writer has finished.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::config::Browser;
use crate::types::errors::AggregateError;
use crate::types::ranking::BrowserTotals;
use crate::types::report::RunRecord;

/// Trait defining log aggregation operations.
pub trait LogAggregatorTrait {
    fn aggregate(&self, log_path: &Path) -> Result<Vec<BrowserTotals>, AggregateError>;
    fn render_totals(&self, totals: &[BrowserTotals], generated_at: i64) -> String;
}

/// Aggregator over a canonical browser set.
///
/// Results always come back in canonical enumeration order, with every
/// configured browser present even when it contributed zero reports.
#[derive(Debug, Clone)]
pub struct LogAggregator {
    browsers: Vec<Browser>,
}

impl LogAggregator {
    pub fn new(browsers: Vec<Browser>) -> Self {
        Self { browsers }
    }

    pub fn browsers(&self) -> &[Browser] {
        &self.browsers
    }

    /// Renders the totals and writes them to the aggregate totals file,
    /// creating parent directories as needed.
    pub fn write_totals_file(
        &self,
        path: impl AsRef<Path>,
        totals: &[BrowserTotals],
        generated_at: i64,
    ) -> Result<(), AggregateError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AggregateError::IoError(e.to_string()))?;
            }
        }
        fs::write(path, self.render_totals(totals, generated_at))
            .map_err(|e| AggregateError::IoError(e.to_string()))
    }
}

impl LogAggregatorTrait for LogAggregator {
    /// Scans the log line by line. Each line that parses as a `RunRecord`
    /// for a browser in the canonical set adds its counters to that
    /// browser's totals and counts one report. Lines that do not parse —
    /// malformed records, blank lines, records for unknown browsers —
    /// are skipped silently so the format can grow without breaking old
    /// aggregators.
    ///
    /// A missing or unreadable log aborts the whole aggregation; per-run
    /// reports already written are unaffected.
    fn aggregate(&self, log_path: &Path) -> Result<Vec<BrowserTotals>, AggregateError> {
        let file = File::open(log_path).map_err(|e| {
            AggregateError::LogUnavailable(format!("{}: {}", log_path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut totals: Vec<BrowserTotals> = self
            .browsers
            .iter()
            .map(|browser| BrowserTotals::new(*browser))
            .collect();

        for line in reader.lines() {
            let line = line.map_err(|e| AggregateError::IoError(e.to_string()))?;

            let record: RunRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(_) => continue,
            };

            if let Some(entry) = totals.iter_mut().find(|t| t.browser == record.browser) {
                entry.add_run(&record.metrics);
            }
        }

        Ok(totals)
    }

    /// Human-readable totals: one uppercase-labeled section per browser
    /// with `Label: value` lines for the full counter set.
    fn render_totals(&self, totals: &[BrowserTotals], generated_at: i64) -> String {
        let mut out = String::new();
        out.push_str("=== BROWSER TOTALS ===\n");
        out.push_str(&format!("Generated: {}\n", generated_at));

        for t in totals {
            out.push('\n');
            out.push_str(&format!("{}:\n", t.browser.as_str().to_uppercase()));
            out.push_str(&format!("Total Reports: {}\n", t.total_reports));
            out.push_str(&format!("Total Cookies: {}\n", t.total_cookies));
            out.push_str(&format!("First-Party Cookies: {}\n", t.first_party));
            out.push_str(&format!("Third-Party Cookies: {}\n", t.third_party));
            out.push_str(&format!("Secure Domains: {}\n", t.secure));
            out.push_str(&format!("Unsecure Domains: {}\n", t.not_secure));
            out.push_str(&format!("HttpOnly: {}\n", t.http_only));
            out.push_str(&format!("Not HttpOnly: {}\n", t.not_http_only));
            out.push_str(&format!("SameSite Strict: {}\n", t.same_site_strict));
            out.push_str(&format!("SameSite Lax: {}\n", t.same_site_lax));
            out.push_str(&format!("SameSite None: {}\n", t.same_site_none));
            out.push_str(&format!("SameSite Unset: {}\n", t.same_site_unset));
            out.push_str(&format!("Session Cookies: {}\n", t.session_cookies));
            out.push_str(&format!("Persistent Cookies: {}\n", t.persistent_cookies));
            out.push_str(&format!("Suspicious Paths: {}\n", t.suspicious_paths));
        }

        out
    }
}
