//! App Core for PrivCrawler.
//!
//! Central struct wiring the pipeline services together and managing the
//! lifecycle of one crawl batch: fan out runs, join, aggregate, rank.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::services::aggregator::{LogAggregator, LogAggregatorTrait};
use crate::services::capture::CookieCaptureTrait;
use crate::services::crawl_runner::{unix_now, CrawlRunner, RunSummary};
use crate::services::ranking_engine::{RankingEngine, RankingEngineTrait};
use crate::services::run_log::RunLogAppender;
use crate::types::config::CrawlConfig;
use crate::types::errors::{AggregateError, LogError};
use crate::types::ranking::{BrowserTotals, RankingReport};

/// Central application struct holding the pipeline services.
pub struct App {
    pub config: CrawlConfig,
    pub run_log: Arc<RunLogAppender>,
    pub runner: CrawlRunner,
    pub aggregator: LogAggregator,
    pub ranking_engine: RankingEngine,
}

impl App {
    /// Creates the app from a crawl configuration, opening the shared run
    /// log for appending.
    pub fn new(config: CrawlConfig) -> Result<Self, LogError> {
        let run_log = Arc::new(RunLogAppender::open(&config.log_path)?);
        let runner = CrawlRunner::new(config.thresholds, Arc::clone(&run_log));
        let aggregator = LogAggregator::new(config.browsers.clone());

        Ok(Self {
            config,
            run_log,
            runner,
            aggregator,
            ranking_engine: RankingEngine::new(),
        })
    }

    /// Fans out the configured run matrix against the capture collaborator
    /// and waits for every run to finish. Once this returns, the run log
    /// is complete for this batch.
    pub async fn crawl(
        &self,
        capture: Arc<dyn CookieCaptureTrait + Send + Sync>,
    ) -> RunSummary {
        self.runner.run_all(self.config.tasks(), capture).await
    }

    /// Rebuilds per-browser totals from the shared run log. Call only
    /// after `crawl` (or any other writer) has finished.
    pub fn aggregate(&self) -> Result<Vec<BrowserTotals>, AggregateError> {
        self.aggregator.aggregate(Path::new(&self.config.log_path))
    }

    /// Writes the aggregate totals file and the rankings file, returning
    /// the ranking report.
    pub fn write_reports(
        &self,
        totals: &[BrowserTotals],
    ) -> Result<RankingReport, AggregateError> {
        self.aggregator
            .write_totals_file(&self.config.totals_path, totals, unix_now())?;

        let report = self.ranking_engine.build_report(totals);
        let rendered = self.ranking_engine.render_report(&report);

        let path = Path::new(&self.config.rankings_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AggregateError::IoError(e.to_string()))?;
            }
        }
        fs::write(path, rendered).map_err(|e| AggregateError::IoError(e.to_string()))?;

        Ok(report)
    }
}
