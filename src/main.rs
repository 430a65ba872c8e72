//! PrivCrawler — cookie privacy analytics for browser crawl runs.
//!
//! Entry point: runs the whole pipeline against a scripted capture backend
//! so every stage can be demonstrated without driving real browsers. Wire
//! a real browser-automation backend through `CookieCaptureTrait` to crawl
//! live sites.

use std::sync::Arc;

use privcrawler::app::App;
use privcrawler::services::capture::CookieCaptureTrait;
use privcrawler::services::classifier::{CookieClassifier, CookieClassifierTrait};
use privcrawler::services::crawl_runner::unix_now;
use privcrawler::types::config::{Browser, CrawlConfig, CrawlTask};
use privcrawler::types::cookie::{CookieCapture, RawCookie};
use privcrawler::types::errors::CaptureError;

/// Deterministic capture backend for the demo: every browser "collects" a
/// plausible cookie jar for the visited site, with tracker-happiness
/// varying by browser so the rankings have something to say.
struct ScriptedCapture;

impl ScriptedCapture {
    fn third_party_count(browser: Browser) -> usize {
        match browser {
            Browser::Chrome => 3,
            Browser::Chromium => 2,
            Browser::Firefox => 1,
            Browser::Webkit => 0,
        }
    }
}

impl CookieCaptureTrait for ScriptedCapture {
    fn capture(&self, task: &CrawlTask) -> Result<CookieCapture, CaptureError> {
        let host = url::Url::parse(&task.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .ok_or_else(|| CaptureError::NavigationFailed(task.url.clone()))?;
        let site_domain = format!(".{}", host.trim_start_matches("www."));

        let mut cookies = vec![
            RawCookie {
                name: "session_id".to_string(),
                value: "a1b2c3".to_string(),
                domain: site_domain.clone(),
                path: "/".to_string(),
                expires: -1.0,
                http_only: true,
                secure: true,
                same_site: "Lax".to_string(),
            },
            RawCookie {
                name: "prefs".to_string(),
                value: "theme=dark".to_string(),
                domain: site_domain,
                path: "/account".to_string(),
                expires: 1893456000.0,
                http_only: false,
                secure: true,
                same_site: "Strict".to_string(),
            },
        ];

        for i in 0..Self::third_party_count(task.browser) {
            cookies.push(RawCookie {
                name: format!("track_{}", i),
                value: "xyz".to_string(),
                domain: ".adtrack.io".to_string(),
                path: "/".to_string(),
                expires: 1893456000.0,
                http_only: false,
                secure: false,
                same_site: String::new(),
            });
        }

        Ok(CookieCapture {
            url: task.url.clone(),
            cookies,
        })
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[tokio::main]
async fn main() {
    println!();
    println!("PrivCrawler v{} — scripted demo", env!("CARGO_PKG_VERSION"));
    println!();

    // Small run matrix so the demo finishes instantly.
    let config = CrawlConfig {
        urls: vec![
            "https://www.amazon.com".to_string(),
            "https://www.reddit.com".to_string(),
        ],
        durations_ms: vec![0, 5000],
        log_path: "demo_runs.jsonl".to_string(),
        totals_path: "demo_browser_totals.txt".to_string(),
        rankings_path: "demo_rankings.txt".to_string(),
        ..CrawlConfig::default()
    };

    section("Classifier");
    let classifier = CookieClassifier::new();
    println!(
        "  .amazon.com visited from www.amazon.com -> first-party: {}",
        classifier.is_first_party(".amazon.com", "https://www.amazon.com")
    );
    println!(
        "  adtrack.io visited from www.amazon.com -> first-party: {}",
        classifier.is_first_party("adtrack.io", "https://www.amazon.com")
    );
    println!();

    let app = App::new(config).expect("Failed to open run log");
    let capture: Arc<dyn CookieCaptureTrait + Send + Sync> = Arc::new(ScriptedCapture);

    section("Single run");
    let first_task = app
        .config
        .tasks()
        .into_iter()
        .next()
        .expect("run matrix is empty");
    let captured = capture.capture(&first_task).unwrap();
    let report = app
        .runner
        .analyze_capture(&captured, first_task.browser, unix_now());
    println!("  URL: {} ({})", report.url, report.browser);
    println!("  Narrative:");
    for line in report.narrative.lines() {
        println!("    {}", line);
    }
    println!();

    section("Concurrent crawl batch");
    let tasks = app.config.tasks();
    println!(
        "  Matrix: {} urls x {} browsers x {} durations = {} runs",
        app.config.urls.len(),
        app.config.browsers.len(),
        app.config.durations_ms.len(),
        tasks.len()
    );
    let summary = app.crawl(Arc::clone(&capture)).await;
    println!(
        "  Completed: {} runs, {} logged, {} capture failures, {} log failures",
        summary.runs, summary.logged, summary.capture_failures, summary.log_failures
    );
    println!();

    section("Aggregation");
    let totals = app.aggregate().expect("Aggregation failed");
    for t in &totals {
        println!(
            "  {}: {} reports, {} cookies ({} third-party, {} secure)",
            t.browser, t.total_reports, t.total_cookies, t.third_party, t.secure
        );
    }
    println!();

    section("Rankings");
    let ranking = app.write_reports(&totals).expect("Report writing failed");
    for entry in &ranking.scoreboard {
        println!(
            "  {}: {} total + {} third-party = {} points",
            entry.browser, entry.total_cookies, entry.third_party, entry.score
        );
    }
    if let Some(winner) = ranking.winner {
        println!("  Winner: {} (lowest score = best privacy)", winner);
    }
    println!();
    println!(
        "  Wrote {}, {}, {}",
        app.config.log_path, app.config.totals_path, app.config.rankings_path
    );

    let _ = std::fs::remove_file(&app.config.log_path);
    let _ = std::fs::remove_file(&app.config.totals_path);
    let _ = std::fs::remove_file(&app.config.rankings_path);
}
