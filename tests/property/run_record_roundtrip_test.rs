//! Property-based tests for RunRecord serialization round-trip.
//!
//! Every record the appender writes must come back unchanged through the
//! aggregator's line parser, for arbitrary field contents.

use proptest::prelude::*;

use privcrawler::types::config::Browser;
use privcrawler::types::metrics::PrivacyMetrics;
use privcrawler::types::report::RunRecord;

fn arb_browser() -> impl Strategy<Value = Browser> {
    prop_oneof![
        Just(Browser::Chrome),
        Just(Browser::Chromium),
        Just(Browser::Firefox),
        Just(Browser::Webkit),
    ]
}

fn arb_metrics() -> impl Strategy<Value = PrivacyMetrics> {
    (
        0u64..1000,
        0u64..1000,
        0u64..1000,
        0u64..1000,
        proptest::collection::vec("/[a-z]{1,10}", 0..5),
    )
        .prop_map(|(total, first, secure, session, suspicious_paths)| PrivacyMetrics {
            total_cookies: total,
            first_party: first,
            third_party: total.saturating_sub(first),
            secure,
            not_secure: total.saturating_sub(secure),
            http_only: 0,
            not_http_only: total,
            same_site_strict: 0,
            same_site_lax: 0,
            same_site_none: 0,
            same_site_unset: total,
            session_cookies: session,
            persistent_cookies: total.saturating_sub(session),
            suspicious_paths,
        })
}

fn arb_record() -> impl Strategy<Value = RunRecord> {
    (
        "[a-f0-9-]{8,36}",
        0i64..4_000_000_000,
        "https://[a-z]{3,12}\\.[a-z]{2,4}",
        arb_browser(),
        arb_metrics(),
        ".{0,200}",
    )
        .prop_map(|(id, timestamp, url, browser, metrics, narrative)| RunRecord {
            id,
            timestamp,
            url,
            browser,
            metrics,
            narrative,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn record_round_trips_through_one_json_line(record in arb_record()) {
        let line = serde_json::to_string(&record)
            .expect("Serialization should succeed for any valid RunRecord");

        // One record must stay one log line, whatever the narrative holds.
        prop_assert!(!line.contains('\n'));

        let parsed: RunRecord = serde_json::from_str(&line)
            .expect("Deserialization should succeed for valid JSON");
        prop_assert_eq!(parsed, record);
    }

    #[test]
    fn browser_token_survives_the_round_trip(browser in arb_browser()) {
        let json = serde_json::to_string(&browser).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", browser.as_str()));
    }
}
