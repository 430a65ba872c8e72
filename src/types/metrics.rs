use serde::{Deserialize, Serialize};

/// Per-run cookie privacy counters.
///
/// Five counter families partition the capture: party, security, httpOnly,
/// SameSite, and lifetime. Each observed cookie increments exactly one
/// counter in every family, so each family sums to `total_cookies`.
/// `suspicious_paths` collects the paths of cookies scoped to anything
/// narrower than "/".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacyMetrics {
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
    #[serde(default)]
    pub suspicious_paths: Vec<String>,
}

/// The per-run counters expressed as percentages of `total_cookies`.
///
/// Every ratio is count/total x 100 in [0, 100]. When a run captured no
/// cookies, every ratio is 0 and `has_data()` is false — an explicit
/// "no data" signal rather than a division error.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRatios {
    pub total_cookies: u64,
    pub first_party: f64,
    pub third_party: f64,
    pub secure: f64,
    pub not_secure: f64,
    pub http_only: f64,
    pub not_http_only: f64,
    pub same_site_strict: f64,
    pub same_site_lax: f64,
    pub same_site_none: f64,
    pub same_site_unset: f64,
    pub session: f64,
    pub persistent: f64,
}

impl AnalysisRatios {
    /// False exactly when the run captured zero cookies.
    pub fn has_data(&self) -> bool {
        self.total_cookies > 0
    }
}
