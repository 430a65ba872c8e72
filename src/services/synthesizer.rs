//! Report Synthesizer for PrivCrawler.
//!
//! Turns an accumulated `PrivacyMetrics` snapshot into percentage ratios,
//! a threshold-gated narrative, and the structured label:value dump used
//! for log persistence. Thresholds are passed in at construction, never
//! read from process-wide state.

use crate::types::config::{Browser, ReportThresholds};
use crate::types::metrics::{AnalysisRatios, PrivacyMetrics};
use crate::types::report::PrivacyReport;

/// Trait defining report synthesis operations.
pub trait ReportSynthesizerTrait {
    fn analyze_metrics(&self, metrics: &PrivacyMetrics) -> AnalysisRatios;
    fn create_report(&self, ratios: &AnalysisRatios) -> String;
    fn metrics_report(&self, metrics: &PrivacyMetrics) -> String;
    fn synthesize(
        &self,
        url: &str,
        browser: Browser,
        timestamp: i64,
        metrics: &PrivacyMetrics,
    ) -> PrivacyReport;
}

/// Percentage of `count` out of `total`, or 0 when the run had no cookies.
fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Synthesizer implementation. Cheap to clone: holds only the thresholds.
#[derive(Debug, Clone)]
pub struct ReportSynthesizer {
    thresholds: ReportThresholds,
}

impl ReportSynthesizer {
    pub fn new(thresholds: ReportThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ReportThresholds {
        &self.thresholds
    }
}

impl ReportSynthesizerTrait for ReportSynthesizer {
    /// Computes every ratio as count/total x 100. A zero-cookie snapshot
    /// yields all-zero ratios with `has_data()` false; no division happens.
    fn analyze_metrics(&self, metrics: &PrivacyMetrics) -> AnalysisRatios {
        let total = metrics.total_cookies;
        AnalysisRatios {
            total_cookies: total,
            first_party: percentage(metrics.first_party, total),
            third_party: percentage(metrics.third_party, total),
            secure: percentage(metrics.secure, total),
            not_secure: percentage(metrics.not_secure, total),
            http_only: percentage(metrics.http_only, total),
            not_http_only: percentage(metrics.not_http_only, total),
            same_site_strict: percentage(metrics.same_site_strict, total),
            same_site_lax: percentage(metrics.same_site_lax, total),
            same_site_none: percentage(metrics.same_site_none, total),
            same_site_unset: percentage(metrics.same_site_unset, total),
            session: percentage(metrics.session_cookies, total),
            persistent: percentage(metrics.persistent_cookies, total),
        }
    }

    /// Builds the narrative. Every comparison is greater-than-or-equal, so
    /// a ratio sitting exactly on a threshold takes the stronger branch.
    /// Each clause carries the literal percentages for auditability.
    fn create_report(&self, ratios: &AnalysisRatios) -> String {
        if !ratios.has_data() {
            return "No cookies were captured during this run; nothing to analyze.".to_string();
        }

        let t = &self.thresholds;
        let mut clauses: Vec<String> = Vec::new();

        // Secure flag coverage: two-way.
        if ratios.secure >= t.secure_min {
            clauses.push(format!(
                "Cookie transport is sufficiently secure: {:.1}% of cookies set the Secure flag ({:.1}% do not).",
                ratios.secure, ratios.not_secure
            ));
        } else {
            clauses.push(format!(
                "This site lacks sufficient use of the Secure flag: only {:.1}% of cookies set it ({:.1}% do not).",
                ratios.secure, ratios.not_secure
            ));
        }

        // HttpOnly coverage: three-way. The >= branch wins before the
        // exact-zero check so a 0% threshold config stays coherent.
        if ratios.http_only >= t.http_only_min {
            clauses.push(format!(
                "HttpOnly coverage is strong: {:.1}% of cookies are shielded from page scripts.",
                ratios.http_only
            ));
        } else if ratios.http_only == 0.0 {
            clauses.push(format!(
                "No cookie sets HttpOnly ({:.1}%); every cookie is readable from page scripts.",
                ratios.http_only
            ));
        } else {
            clauses.push(format!(
                "HttpOnly coverage is below threshold: {:.1}% of cookies set it ({:.1}% do not).",
                ratios.http_only, ratios.not_http_only
            ));
        }

        // SameSite buckets: each bucket earns its own clause independently,
        // so several clauses can appear for one capture.
        if ratios.same_site_strict >= t.same_site_min {
            clauses.push(format!(
                "A majority of cookies enforce SameSite=Strict ({:.1}%).",
                ratios.same_site_strict
            ));
        }
        if ratios.same_site_lax >= t.same_site_min {
            clauses.push(format!(
                "A majority of cookies use SameSite=Lax ({:.1}%).",
                ratios.same_site_lax
            ));
        }
        if ratios.same_site_none >= t.same_site_min {
            clauses.push(format!(
                "A majority of cookies disable cross-site protection with SameSite=None ({:.1}%).",
                ratios.same_site_none
            ));
        }
        if ratios.same_site_unset >= t.same_site_min {
            clauses.push(format!(
                "A majority of cookies leave SameSite unset ({:.1}%), falling back to browser defaults.",
                ratios.same_site_unset
            ));
        }

        // Lifetime: a baseline clause whenever the class is present at all,
        // plus an emphasis clause once it reaches the emphasis threshold.
        if ratios.session > 0.0 {
            clauses.push(format!(
                "Session cookies are present ({:.1}%), cleared when the browsing session ends.",
                ratios.session
            ));
            if ratios.session >= t.lifetime_emphasis_min {
                clauses.push(format!(
                    "Session cookies dominate this capture at {:.1}%.",
                    ratios.session
                ));
            }
        }
        if ratios.persistent > 0.0 {
            clauses.push(format!(
                "Persistent cookies are present ({:.1}%), surviving beyond the browsing session.",
                ratios.persistent
            ));
            if ratios.persistent >= t.lifetime_emphasis_min {
                clauses.push(format!(
                    "Persistent cookies dominate this capture at {:.1}%.",
                    ratios.persistent
                ));
            }
        }

        // Party split: whichever side is larger gets the dominant clause.
        // A tie counts as first-party dominance.
        if ratios.first_party >= ratios.third_party {
            clauses.push(format!(
                "First-party cookies dominate: {:.1}% first-party vs {:.1}% third-party.",
                ratios.first_party, ratios.third_party
            ));
        } else {
            clauses.push(format!(
                "Third-party cookies dominate: {:.1}% third-party vs {:.1}% first-party.",
                ratios.third_party, ratios.first_party
            ));
        }

        clauses.join("\n")
    }

    /// The structured label:value dump: every counter in a fixed, stable
    /// format, plus an enumerated suspicious-paths section when non-empty.
    /// No thresholds are applied here.
    fn metrics_report(&self, metrics: &PrivacyMetrics) -> String {
        let mut out = String::new();

        out.push_str(&format!("Total Cookies: {}\n", metrics.total_cookies));
        out.push_str(&format!(
            "Total First-Party Cookies: {}\n",
            metrics.first_party
        ));
        out.push_str(&format!(
            "Total Third-Party Cookies: {}\n",
            metrics.third_party
        ));
        out.push_str(&format!("Total Secure Domains: {}\n", metrics.secure));
        out.push_str(&format!("Total Unsecure Domains: {}\n", metrics.not_secure));
        out.push_str(&format!("Total HttpOnly: {}\n", metrics.http_only));
        out.push_str(&format!("Total Not HttpOnly: {}\n", metrics.not_http_only));
        out.push_str(&format!(
            "Total SameSite with Strict: {}\n",
            metrics.same_site_strict
        ));
        out.push_str(&format!(
            "Total SameSite with Lax: {}\n",
            metrics.same_site_lax
        ));
        out.push_str(&format!(
            "Total SameSite with None: {}\n",
            metrics.same_site_none
        ));
        out.push_str(&format!(
            "Total SameSite with Unset: {}\n",
            metrics.same_site_unset
        ));
        out.push_str(&format!(
            "Total Session Cookies: {}\n",
            metrics.session_cookies
        ));
        out.push_str(&format!(
            "Total Persistent Cookies: {}\n",
            metrics.persistent_cookies
        ));

        if !metrics.suspicious_paths.is_empty() {
            out.push_str(&format!(
                "Suspicious Paths ({}):\n",
                metrics.suspicious_paths.len()
            ));
            for (i, path) in metrics.suspicious_paths.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, path));
            }
        }

        out
    }

    /// Runs all three steps and tags the result with the capture context.
    /// Synthesizing the same snapshot twice yields byte-identical output.
    fn synthesize(
        &self,
        url: &str,
        browser: Browser,
        timestamp: i64,
        metrics: &PrivacyMetrics,
    ) -> PrivacyReport {
        let ratios = self.analyze_metrics(metrics);
        PrivacyReport {
            url: url.to_string(),
            browser,
            timestamp,
            narrative: self.create_report(&ratios),
            structured: self.metrics_report(metrics),
            metrics: metrics.clone(),
        }
    }
}
