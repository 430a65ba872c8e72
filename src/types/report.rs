use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::Browser;
use super::metrics::PrivacyMetrics;

/// The finished analysis of one crawl run: threshold-driven narrative text
/// plus the structured label:value dump, tagged with the capture context.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyReport {
    pub url: String,
    pub browser: Browser,
    pub timestamp: i64,
    pub narrative: String,
    pub structured: String,
    pub metrics: PrivacyMetrics,
}

/// The durable log record for one run, written as a single line of JSON to
/// the shared run log. Unknown fields in stored records are tolerated on
/// read, so the format can grow without breaking older aggregators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub timestamp: i64,
    pub url: String,
    pub browser: Browser,
    pub metrics: PrivacyMetrics,
    pub narrative: String,
}

impl RunRecord {
    pub fn from_report(report: &PrivacyReport) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: report.timestamp,
            url: report.url.clone(),
            browser: report.browser,
            metrics: report.metrics.clone(),
            narrative: report.narrative.clone(),
        }
    }
}
