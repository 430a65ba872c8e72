//! Unit tests for the run log appender, including the atomic-append
//! contract under concurrent writers.

use std::fs;
use std::sync::Arc;
use std::thread;

use privcrawler::services::run_log::RunLogAppender;
use privcrawler::types::config::Browser;
use privcrawler::types::metrics::PrivacyMetrics;
use privcrawler::types::report::RunRecord;

fn record(browser: Browser, cookies: u64) -> RunRecord {
    RunRecord {
        id: format!("{}-{}", browser, cookies),
        timestamp: 1700000000,
        url: "https://www.example.com".to_string(),
        browser,
        metrics: PrivacyMetrics {
            total_cookies: cookies,
            first_party: cookies,
            secure: cookies,
            http_only: cookies,
            same_site_lax: cookies,
            persistent_cookies: cookies,
            ..PrivacyMetrics::default()
        },
        narrative: "narrative text".to_string(),
    }
}

#[test]
fn appended_record_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");

    let log = RunLogAppender::open(&path).unwrap();
    let original = record(Browser::Webkit, 4);
    log.append(&original).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: RunRecord = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn log_is_utf8_with_one_record_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");

    let log = RunLogAppender::open(&path).unwrap();
    for i in 0..5 {
        log.append(&record(Browser::Chrome, i)).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 5);
    assert!(content.ends_with('\n'));
}

#[test]
fn concurrent_appends_never_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");

    let log = Arc::new(RunLogAppender::open(&path).unwrap());
    let writers = 8;
    let records_each = 25;

    let mut handles = Vec::new();
    for w in 0..writers {
        let log = Arc::clone(&log);
        handles.push(thread::spawn(move || {
            let browser = Browser::ALL[w % Browser::ALL.len()];
            for i in 0..records_each {
                log.append(&record(browser, i as u64)).unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    // Every line must parse back as a whole record: a torn or interleaved
    // write would corrupt at least one line.
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), writers * records_each);
    for line in lines {
        let parsed: Result<RunRecord, _> = serde_json::from_str(line);
        assert!(parsed.is_ok(), "corrupted log line: {}", line);
    }
}

#[test]
fn path_accessor_reports_the_opened_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");
    let log = RunLogAppender::open(&path).unwrap();
    assert_eq!(log.path(), path.as_path());
}
