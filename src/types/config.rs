use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// The canonical set of browser engines a crawl can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    /// Canonical enumeration order. Aggregation results and ranking
    /// tie-breaks follow this order, not map iteration order.
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Chromium,
        Browser::Firefox,
        Browser::Webkit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }

    /// Resolves a browser token from configuration or the command line.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        match token.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "chromium" => Ok(Browser::Chromium),
            "firefox" => Ok(Browser::Firefox),
            "webkit" => Ok(Browser::Webkit),
            _ => Err(ConfigError::UnknownBrowser(token.to_string())),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unit of crawl work: a single (site, browser, duration) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlTask {
    pub url: String,
    pub browser: Browser,
    /// How long the page is left open for scripts to set cookies, in ms.
    pub duration_ms: u64,
    pub headless: bool,
}

/// Threshold constants the report synthesizer compares ratios against.
/// All comparisons are greater-than-or-equal: the boundary value itself
/// selects the stronger branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportThresholds {
    /// Minimum Secure-flag percentage for the "sufficiently secure" branch.
    pub secure_min: f64,
    /// Minimum HttpOnly percentage for the strong-coverage branch.
    pub http_only_min: f64,
    /// Minimum percentage for a SameSite bucket to earn its own clause.
    pub same_site_min: f64,
    /// Minimum percentage for a lifetime class to earn the emphasis clause.
    pub lifetime_emphasis_min: f64,
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            secure_min: 80.0,
            http_only_min: 70.0,
            same_site_min: 50.0,
            lifetime_emphasis_min: 50.0,
        }
    }
}

/// Crawl configuration: which browsers visit which sites for how long,
/// plus the output paths the pipeline writes to. Loaded from a JSON file;
/// a missing file yields the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlConfig {
    pub browsers: Vec<Browser>,
    pub urls: Vec<String>,
    pub durations_ms: Vec<u64>,
    pub headless: bool,
    pub verbose: bool,
    pub log_path: String,
    pub totals_path: String,
    pub rankings_path: String,
    #[serde(default)]
    pub thresholds: ReportThresholds,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            browsers: Browser::ALL.to_vec(),
            urls: vec![
                "https://www.amazon.com".to_string(),
                "https://www.yahoo.com".to_string(),
                "https://www.reddit.com".to_string(),
                "https://www.pinterest.com".to_string(),
                "https://www.fandom.com".to_string(),
                "https://www.endace.com".to_string(),
            ],
            durations_ms: vec![0, 5000, 10000, 15000, 20000, 25000],
            headless: true,
            verbose: false,
            log_path: "data/runs.jsonl".to_string(),
            totals_path: "data/browser_totals.txt".to_string(),
            rankings_path: "data/rankings.txt".to_string(),
            thresholds: ReportThresholds::default(),
        }
    }
}

impl CrawlConfig {
    /// Loads configuration from a JSON file.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Saves the configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))
    }

    /// Expands the configuration into the full run matrix: the cartesian
    /// product of urls, browsers, and durations, generated programmatically.
    pub fn tasks(&self) -> Vec<CrawlTask> {
        let mut tasks = Vec::with_capacity(
            self.urls.len() * self.browsers.len() * self.durations_ms.len(),
        );
        for url in &self.urls {
            for duration_ms in &self.durations_ms {
                for browser in &self.browsers {
                    tasks.push(CrawlTask {
                        url: url.clone(),
                        browser: *browser,
                        duration_ms: *duration_ms,
                        headless: self.headless,
                    });
                }
            }
        }
        tasks
    }
}

/// A standalone URL list file ({"urls": [...]}), kept separate from the
/// main configuration so site lists can be swapped without touching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlList {
    pub urls: Vec<String>,
}

impl UrlList {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("Failed to read URL list: {}", e)))?;

        serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse URL list: {}", e))
        })
    }
}
