use std::fmt;

use serde::{Deserialize, Serialize};

/// SameSite bucket a cookie falls into after classification.
///
/// `Unset` means the browser reported no SameSite attribute at all;
/// it is counted separately from an explicit `SameSite=None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
    Unset,
}

impl SameSite {
    /// Maps the raw attribute string reported by the capture engine.
    ///
    /// Matching is case-insensitive; anything that is not Strict/Lax/None
    /// (including an empty string for an absent attribute) is `Unset`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => SameSite::Strict,
            "lax" => SameSite::Lax,
            "none" => SameSite::None,
            _ => SameSite::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
            SameSite::Unset => "Unset",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One raw cookie tuple as reported by the browser-capture collaborator.
///
/// `expires` is seconds since the Unix epoch; a negative value means the
/// cookie carries no expiry (browser convention for session cookies).
/// `same_site` is the raw attribute string; empty means the attribute
/// was not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: f64,
    pub http_only: bool,
    pub secure: bool,
    #[serde(default)]
    pub same_site: String,
}

/// A classified cookie: the raw fields plus the derived facet labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: f64,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub is_first_party: bool,
}

impl CookieRecord {
    /// A cookie is a session cookie iff its expiry is negative;
    /// any non-negative expiry (including zero) is persistent.
    pub fn is_session(&self) -> bool {
        self.expires < 0.0
    }
}

/// Everything one browsing session produced: the visited URL plus the
/// raw cookies the capture collaborator returned for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieCapture {
    pub url: String,
    pub cookies: Vec<RawCookie>,
}

impl CookieCapture {
    /// A capture with no cookies. Used when the capture collaborator fails:
    /// the run still completes, contributing zero counts.
    pub fn empty(url: String) -> Self {
        Self {
            url,
            cookies: Vec::new(),
        }
    }
}
