//! Cookie capture interface for PrivCrawler.
//!
//! The browser-automation engine that actually drives a browser lives
//! outside this crate. The pipeline only depends on this trait: hand it a
//! crawl task, get back the visited URL plus the raw cookies the session
//! set.

use crate::types::config::CrawlTask;
use crate::types::cookie::CookieCapture;
use crate::types::errors::CaptureError;

/// Contract the browser-capture collaborator implements.
///
/// Implementations are driven from parallel crawl tasks and must be safe
/// to call concurrently. The pipeline never retries: a capture error
/// degrades the run to an empty capture with zero counts.
pub trait CookieCaptureTrait {
    fn capture(&self, task: &CrawlTask) -> Result<CookieCapture, CaptureError>;
}

/// Capture backend that always returns an empty capture. Useful for dry
/// runs of the pipeline and for wiring tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCapture;

impl CookieCaptureTrait for NullCapture {
    fn capture(&self, task: &CrawlTask) -> Result<CookieCapture, CaptureError> {
        Ok(CookieCapture::empty(task.url.clone()))
    }
}
