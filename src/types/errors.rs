use std::fmt;

// === ConfigError ===

/// Errors related to crawl configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing configuration.
    IoError(String),
    /// Failed to serialize or deserialize configuration.
    SerializationError(String),
    /// The given browser token is not in the canonical set.
    UnknownBrowser(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::UnknownBrowser(token) => write!(f, "Unknown browser: {}", token),
        }
    }
}

impl std::error::Error for ConfigError {}

// === CaptureError ===

/// Errors reported by the browser-capture collaborator.
#[derive(Debug)]
pub enum CaptureError {
    /// The browser engine could not be launched.
    LaunchFailed(String),
    /// Navigation to the target URL failed.
    NavigationFailed(String),
    /// The capture backend is not available at all.
    Unavailable(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::LaunchFailed(msg) => write!(f, "Browser launch failed: {}", msg),
            CaptureError::NavigationFailed(msg) => write!(f, "Navigation failed: {}", msg),
            CaptureError::Unavailable(msg) => write!(f, "Capture backend unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}

// === LogError ===

/// Errors related to the shared run log.
#[derive(Debug)]
pub enum LogError {
    /// An I/O error occurred while opening or appending to the log.
    IoError(String),
    /// Failed to serialize a run record.
    SerializationError(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::IoError(msg) => write!(f, "Run log I/O error: {}", msg),
            LogError::SerializationError(msg) => {
                write!(f, "Run log serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for LogError {}

// === AggregateError ===

/// Errors related to log aggregation and report files.
#[derive(Debug)]
pub enum AggregateError {
    /// The shared run log is missing or unreadable.
    LogUnavailable(String),
    /// An I/O error occurred while scanning the log or writing reports.
    IoError(String),
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::LogUnavailable(msg) => {
                write!(f, "Run log unavailable: {}", msg)
            }
            AggregateError::IoError(msg) => write!(f, "Aggregation I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AggregateError {}

// === FetchError ===

/// Errors related to the plain HTTP header-fetch helper.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be constructed.
    InvalidRequest(String),
    /// The request was sent but failed.
    RequestFailed(String),
    /// No User-Agent is known for the requested browser token.
    UnknownAgent(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidRequest(msg) => write!(f, "Invalid fetch request: {}", msg),
            FetchError::RequestFailed(msg) => write!(f, "Fetch request failed: {}", msg),
            FetchError::UnknownAgent(token) => {
                write!(f, "No User-Agent for browser: {}", token)
            }
        }
    }
}

impl std::error::Error for FetchError {}
