//! Property-based tests for ratio analysis: every percentage stays in
//! [0, 100], mirrors count/total x 100, and a zero-cookie snapshot is the
//! explicit no-data signal instead of a division error.

use proptest::prelude::*;

use privcrawler::services::synthesizer::{ReportSynthesizer, ReportSynthesizerTrait};
use privcrawler::types::config::ReportThresholds;
use privcrawler::types::metrics::PrivacyMetrics;

/// Builds metrics whose families all partition `total`, the only shape the
/// accumulator can produce.
fn arb_metrics() -> impl Strategy<Value = PrivacyMetrics> {
    (0u64..120).prop_flat_map(|total| {
        (
            0..=total,
            0..=total,
            0..=total,
            (0..=total).prop_flat_map(move |strict| {
                (0..=(total - strict)).prop_flat_map(move |lax| {
                    (0..=(total - strict - lax))
                        .prop_map(move |none| (strict, lax, none))
                })
            }),
            0..=total,
        )
            .prop_map(
                move |(first_party, secure, http_only, (strict, lax, none), session)| {
                    PrivacyMetrics {
                        total_cookies: total,
                        first_party,
                        third_party: total - first_party,
                        secure,
                        not_secure: total - secure,
                        http_only,
                        not_http_only: total - http_only,
                        same_site_strict: strict,
                        same_site_lax: lax,
                        same_site_none: none,
                        same_site_unset: total - strict - lax - none,
                        session_cookies: session,
                        persistent_cookies: total - session,
                        suspicious_paths: Vec::new(),
                    }
                },
            )
    })
}

fn pct(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_ratio_is_finite_and_in_range(metrics in arb_metrics()) {
        let s = ReportSynthesizer::new(ReportThresholds::default());
        let r = s.analyze_metrics(&metrics);

        for value in [
            r.first_party, r.third_party, r.secure, r.not_secure,
            r.http_only, r.not_http_only, r.same_site_strict, r.same_site_lax,
            r.same_site_none, r.same_site_unset, r.session, r.persistent,
        ] {
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn ratios_mirror_count_over_total(metrics in arb_metrics()) {
        let s = ReportSynthesizer::new(ReportThresholds::default());
        let r = s.analyze_metrics(&metrics);
        let total = metrics.total_cookies;

        prop_assert_eq!(r.first_party, pct(metrics.first_party, total));
        prop_assert_eq!(r.secure, pct(metrics.secure, total));
        prop_assert_eq!(r.http_only, pct(metrics.http_only, total));
        prop_assert_eq!(r.same_site_strict, pct(metrics.same_site_strict, total));
        prop_assert_eq!(r.session, pct(metrics.session_cookies, total));
        prop_assert_eq!(r.persistent, pct(metrics.persistent_cookies, total));
    }

    #[test]
    fn complementary_pairs_sum_to_hundred_when_data_exists(metrics in arb_metrics()) {
        prop_assume!(metrics.total_cookies > 0);
        let s = ReportSynthesizer::new(ReportThresholds::default());
        let r = s.analyze_metrics(&metrics);

        prop_assert!((r.first_party + r.third_party - 100.0).abs() < 1e-9);
        prop_assert!((r.secure + r.not_secure - 100.0).abs() < 1e-9);
        prop_assert!((r.http_only + r.not_http_only - 100.0).abs() < 1e-9);
        prop_assert!((r.session + r.persistent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn narrative_is_idempotent_for_any_snapshot(metrics in arb_metrics()) {
        let s = ReportSynthesizer::new(ReportThresholds::default());
        let first = s.create_report(&s.analyze_metrics(&metrics));
        let second = s.create_report(&s.analyze_metrics(&metrics));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn zero_total_is_no_data_not_a_division_error() {
    let s = ReportSynthesizer::new(ReportThresholds::default());
    let r = s.analyze_metrics(&PrivacyMetrics::default());
    assert!(!r.has_data());
    assert_eq!(r.first_party, 0.0);
    assert_eq!(r.persistent, 0.0);
}
