//! HTTP header-fetch helper for PrivCrawler.
//!
//! A plain GET with a spoofed per-browser User-Agent, used to peek at the
//! headers a site serves different clients. Separate from the analytics
//! pipeline: no cookies are classified here and nothing is retried.

use std::collections::HashMap;
use std::time::Duration;

use crate::types::errors::FetchError;

/// What one fetch produced: status line, headers, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPacket {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Header fetcher with a fixed table of User-Agent strings.
pub struct HeaderFetcher {
    client: reqwest::Client,
    agents: HashMap<&'static str, &'static str>,
}

impl HeaderFetcher {
    /// Builds the fetcher with a 10-second request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            agents: Self::agent_table(),
        })
    }

    /// User-Agent strings per client token, including a couple of
    /// non-browser agents for comparison fetches.
    fn agent_table() -> HashMap<&'static str, &'static str> {
        let mut agents = HashMap::new();
        agents.insert(
            "chrome",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36",
        );
        agents.insert(
            "firefox",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/112.0",
        );
        agents.insert(
            "safari",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.4 Safari/605.1.15",
        );
        agents.insert(
            "edge",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36 Edg/112.0.1722.48",
        );
        agents.insert(
            "bot",
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        );
        agents.insert("curl", "curl/7.84.0");
        agents
    }

    /// All known client tokens and their User-Agent strings.
    pub fn agents(&self) -> &HashMap<&'static str, &'static str> {
        &self.agents
    }

    /// Resolves a client token to its User-Agent.
    pub fn verify_agent(&self, browser: &str) -> Result<&'static str, FetchError> {
        self.agents
            .get(browser)
            .copied()
            .ok_or_else(|| FetchError::UnknownAgent(browser.to_string()))
    }

    /// Fetches the URL as the given client and returns the whole packet.
    pub async fn fetch(&self, url: &str, browser: &str) -> Result<FetchedPacket, FetchError> {
        let agent = self.verify_agent(browser)?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, agent)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).to_string(),
                )
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?
            .to_vec();

        Ok(FetchedPacket {
            status,
            headers,
            body,
        })
    }
}
