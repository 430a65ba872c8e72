//! Crawl Runner for PrivCrawler.
//!
//! Executes the run matrix as parallel, non-cooperating tasks. Each run
//! owns a private accumulator and report; the only shared resource is the
//! run log appender, which serializes writes internally. `run_all` joins
//! every task before returning, so aggregation always observes a fully
//! written log.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::services::accumulator::MetricsAccumulator;
use crate::services::capture::CookieCaptureTrait;
use crate::services::classifier::{CookieClassifier, CookieClassifierTrait};
use crate::services::run_log::RunLogAppender;
use crate::services::synthesizer::{ReportSynthesizer, ReportSynthesizerTrait};
use crate::types::config::{Browser, CrawlTask, ReportThresholds};
use crate::types::cookie::CookieCapture;
use crate::types::report::{PrivacyReport, RunRecord};

/// Outcome of one `run_all` batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks executed.
    pub runs: usize,
    /// Records that reached the shared log.
    pub logged: usize,
    /// Runs whose capture failed and degraded to zero cookies.
    pub capture_failures: usize,
    /// Runs whose record could not be appended.
    pub log_failures: usize,
}

/// Seconds since the Unix epoch, for tagging reports.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Runs crawl tasks through the per-run pipeline and into the shared log.
pub struct CrawlRunner {
    classifier: CookieClassifier,
    synthesizer: ReportSynthesizer,
    log: Arc<RunLogAppender>,
}

impl CrawlRunner {
    pub fn new(thresholds: ReportThresholds, log: Arc<RunLogAppender>) -> Self {
        Self {
            classifier: CookieClassifier::new(),
            synthesizer: ReportSynthesizer::new(thresholds),
            log,
        }
    }

    /// The per-run pipeline: classify every raw cookie, accumulate the
    /// metrics, synthesize the report. The accumulator lives only inside
    /// this call.
    fn analyze(
        classifier: &CookieClassifier,
        synthesizer: &ReportSynthesizer,
        capture: &CookieCapture,
        browser: Browser,
        timestamp: i64,
    ) -> PrivacyReport {
        let mut accumulator = MetricsAccumulator::new();
        for raw in &capture.cookies {
            let cookie = classifier.classify(raw, &capture.url);
            accumulator.observe(&cookie);
        }
        synthesizer.synthesize(&capture.url, browser, timestamp, &accumulator.finish())
    }

    /// Analyzes one capture without touching the log. Used by callers that
    /// want a report for a capture they obtained themselves.
    pub fn analyze_capture(
        &self,
        capture: &CookieCapture,
        browser: Browser,
        timestamp: i64,
    ) -> PrivacyReport {
        Self::analyze(&self.classifier, &self.synthesizer, capture, browser, timestamp)
    }

    /// Executes every task as an independent blocking task and waits for
    /// all of them. A failed capture contributes a zero-cookie run rather
    /// than being retried. Returning implies every append has completed,
    /// which is the barrier the aggregator relies on.
    pub async fn run_all(
        &self,
        tasks: Vec<CrawlTask>,
        capture: Arc<dyn CookieCaptureTrait + Send + Sync>,
    ) -> RunSummary {
        let mut handles = Vec::with_capacity(tasks.len());

        for task in tasks {
            let capture = Arc::clone(&capture);
            let classifier = self.classifier;
            let synthesizer = self.synthesizer.clone();
            let log = Arc::clone(&self.log);

            handles.push(tokio::task::spawn_blocking(move || {
                let (captured, capture_failed) = match capture.capture(&task) {
                    Ok(c) => (c, false),
                    Err(_) => (CookieCapture::empty(task.url.clone()), true),
                };

                let report = Self::analyze(
                    &classifier,
                    &synthesizer,
                    &captured,
                    task.browser,
                    unix_now(),
                );

                let logged = log.append(&RunRecord::from_report(&report)).is_ok();
                (capture_failed, logged)
            }));
        }

        let mut summary = RunSummary::default();
        for handle in handles {
            summary.runs += 1;
            match handle.await {
                Ok((capture_failed, logged)) => {
                    if capture_failed {
                        summary.capture_failures += 1;
                    }
                    if logged {
                        summary.logged += 1;
                    } else {
                        summary.log_failures += 1;
                    }
                }
                Err(_) => {
                    // A panicked run produced nothing.
                    summary.capture_failures += 1;
                    summary.log_failures += 1;
                }
            }
        }
        summary
    }
}
