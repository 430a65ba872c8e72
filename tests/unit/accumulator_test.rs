//! Unit tests for the metrics accumulator.

use privcrawler::services::accumulator::MetricsAccumulator;
use privcrawler::types::cookie::{CookieRecord, SameSite};

fn cookie(
    first_party: bool,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
    expires: f64,
    path: &str,
) -> CookieRecord {
    CookieRecord {
        name: "c".to_string(),
        value: "v".to_string(),
        domain: "example.com".to_string(),
        path: path.to_string(),
        expires,
        http_only,
        secure,
        same_site,
        is_first_party: first_party,
    }
}

#[test]
fn fresh_accumulator_is_all_zero() {
    let acc = MetricsAccumulator::new();
    let m = acc.metrics();
    assert_eq!(m.total_cookies, 0);
    assert_eq!(m.first_party + m.third_party, 0);
    assert!(m.suspicious_paths.is_empty());
}

#[test]
fn observe_increments_one_counter_per_family() {
    let mut acc = MetricsAccumulator::new();
    acc.observe(&cookie(true, true, true, SameSite::Strict, -1.0, "/"));

    let m = acc.metrics();
    assert_eq!(m.total_cookies, 1);
    assert_eq!(m.first_party, 1);
    assert_eq!(m.third_party, 0);
    assert_eq!(m.secure, 1);
    assert_eq!(m.not_secure, 0);
    assert_eq!(m.http_only, 1);
    assert_eq!(m.not_http_only, 0);
    assert_eq!(m.same_site_strict, 1);
    assert_eq!(m.session_cookies, 1);
    assert_eq!(m.persistent_cookies, 0);
}

#[test]
fn negative_branches_hit_the_complement_counters() {
    let mut acc = MetricsAccumulator::new();
    acc.observe(&cookie(false, false, false, SameSite::Unset, 0.0, "/"));

    let m = acc.metrics();
    assert_eq!(m.third_party, 1);
    assert_eq!(m.not_secure, 1);
    assert_eq!(m.not_http_only, 1);
    assert_eq!(m.same_site_unset, 1);
    // Zero expiry is persistent, not session.
    assert_eq!(m.persistent_cookies, 1);
    assert_eq!(m.session_cookies, 0);
}

#[test]
fn same_site_buckets_are_mutually_exclusive() {
    let mut acc = MetricsAccumulator::new();
    acc.observe(&cookie(true, true, true, SameSite::Strict, 1.0, "/"));
    acc.observe(&cookie(true, true, true, SameSite::Lax, 1.0, "/"));
    acc.observe(&cookie(true, true, true, SameSite::None, 1.0, "/"));
    acc.observe(&cookie(true, true, true, SameSite::Unset, 1.0, "/"));

    let m = acc.metrics();
    assert_eq!(m.same_site_strict, 1);
    assert_eq!(m.same_site_lax, 1);
    assert_eq!(m.same_site_none, 1);
    assert_eq!(m.same_site_unset, 1);
    assert_eq!(
        m.same_site_strict + m.same_site_lax + m.same_site_none + m.same_site_unset,
        m.total_cookies
    );
}

#[test]
fn narrow_path_is_recorded_as_suspicious() {
    let mut acc = MetricsAccumulator::new();
    acc.observe(&cookie(true, true, true, SameSite::Lax, 1.0, "/"));
    acc.observe(&cookie(true, true, true, SameSite::Lax, 1.0, "/checkout"));
    acc.observe(&cookie(true, true, true, SameSite::Lax, 1.0, "/account/settings"));

    let m = acc.metrics();
    assert_eq!(m.suspicious_paths, vec!["/checkout", "/account/settings"]);
}

#[test]
fn pair_invariants_hold_after_mixed_observations() {
    let mut acc = MetricsAccumulator::new();
    let inputs = [
        cookie(true, true, false, SameSite::Lax, -1.0, "/"),
        cookie(false, false, true, SameSite::None, 0.0, "/x"),
        cookie(false, true, true, SameSite::Strict, 100.0, "/"),
        cookie(true, false, false, SameSite::Unset, -1.0, "/y"),
        cookie(true, true, true, SameSite::Lax, 5.0, "/"),
    ];
    for c in &inputs {
        acc.observe(c);
    }

    let m = acc.finish();
    assert_eq!(m.total_cookies, 5);
    assert_eq!(m.first_party + m.third_party, m.total_cookies);
    assert_eq!(m.secure + m.not_secure, m.total_cookies);
    assert_eq!(m.http_only + m.not_http_only, m.total_cookies);
    assert_eq!(
        m.same_site_strict + m.same_site_lax + m.same_site_none + m.same_site_unset,
        m.total_cookies
    );
    assert_eq!(m.session_cookies + m.persistent_cookies, m.total_cookies);
    assert_eq!(m.suspicious_paths.len(), 2);
}
