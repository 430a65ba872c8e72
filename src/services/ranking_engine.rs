//! Ranking Engine for PrivCrawler.
//!
//! Ranks aggregated browser totals under three criteria and computes the
//! composite privacy score. All sorts are stable, so browsers tied on a
//! criterion keep their canonical enumeration order.

use crate::types::ranking::{BrowserTotals, RankingCriterion, RankingReport, ScoreEntry};

/// Trait defining ranking operations.
pub trait RankingEngineTrait {
    fn rank_by(&self, totals: &[BrowserTotals], criterion: RankingCriterion)
        -> Vec<BrowserTotals>;
    fn composite_score(&self, totals: &BrowserTotals) -> u64;
    fn winner<'a>(&self, totals: &'a [BrowserTotals]) -> Option<&'a BrowserTotals>;
    fn build_report(&self, totals: &[BrowserTotals]) -> RankingReport;
    fn render_report(&self, report: &RankingReport) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RankingEngineTrait for RankingEngine {
    /// Returns a ranked copy of the totals. `slice::sort_by` is stable,
    /// so ties preserve the input (canonical) order.
    fn rank_by(
        &self,
        totals: &[BrowserTotals],
        criterion: RankingCriterion,
    ) -> Vec<BrowserTotals> {
        let mut ranked = totals.to_vec();
        match criterion {
            RankingCriterion::FewestCookies => {
                ranked.sort_by(|a, b| a.total_cookies.cmp(&b.total_cookies));
            }
            RankingCriterion::FewestThirdParty => {
                ranked.sort_by(|a, b| a.third_party.cmp(&b.third_party));
            }
            RankingCriterion::MostSecure => {
                ranked.sort_by(|a, b| b.secure.cmp(&a.secure));
            }
        }
        ranked
    }

    /// Composite privacy score: total cookies + third-party x 2.
    /// Lower is better.
    fn composite_score(&self, totals: &BrowserTotals) -> u64 {
        totals.total_cookies + totals.third_party * 2
    }

    /// The browser with the minimum composite score. On an exact tie the
    /// first browser encountered in the slice wins, which makes the result
    /// deterministic over the canonical enumeration order.
    fn winner<'a>(&self, totals: &'a [BrowserTotals]) -> Option<&'a BrowserTotals> {
        let mut best: Option<&BrowserTotals> = None;
        let mut best_score = u64::MAX;
        for t in totals {
            let score = self.composite_score(t);
            if score < best_score {
                best_score = score;
                best = Some(t);
            }
        }
        best
    }

    /// Builds the three rankings, the scoreboard, and the winner in one
    /// pass over the aggregated totals.
    fn build_report(&self, totals: &[BrowserTotals]) -> RankingReport {
        let scoreboard = totals
            .iter()
            .map(|t| ScoreEntry {
                browser: t.browser,
                total_cookies: t.total_cookies,
                third_party: t.third_party,
                score: self.composite_score(t),
            })
            .collect();

        RankingReport {
            fewest_cookies: self.rank_by(totals, RankingCriterion::FewestCookies),
            fewest_third_party: self.rank_by(totals, RankingCriterion::FewestThirdParty),
            most_secure: self.rank_by(totals, RankingCriterion::MostSecure),
            scoreboard,
            winner: self.winner(totals).map(|t| t.browser),
        }
    }

    /// Renders the rankings file: three ranked sections plus the winner
    /// declaration with the per-browser score breakdown.
    fn render_report(&self, report: &RankingReport) -> String {
        let mut out = String::new();
        out.push_str("=== BROWSER PRIVACY RANKINGS ===\n\n");

        out.push_str("1. FEWEST COOKIES (Better for Privacy):\n");
        for (i, t) in report.fewest_cookies.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {}: {} cookies\n",
                i + 1,
                t.browser.as_str().to_uppercase(),
                t.total_cookies
            ));
        }

        out.push_str("\n2. FEWEST THIRD-PARTY COOKIES:\n");
        for (i, t) in report.fewest_third_party.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {}: {} third-party\n",
                i + 1,
                t.browser.as_str().to_uppercase(),
                t.third_party
            ));
        }

        out.push_str("\n3. MOST SECURE COOKIES:\n");
        for (i, t) in report.most_secure.iter().enumerate() {
            out.push_str(&format!(
                "   {}. {}: {} secure\n",
                i + 1,
                t.browser.as_str().to_uppercase(),
                t.secure
            ));
        }

        out.push_str("\n=== PRIVACY WINNER ===\n");
        for entry in &report.scoreboard {
            out.push_str(&format!(
                "{}: {} total + {} third-party = {} points\n",
                entry.browser.as_str().to_uppercase(),
                entry.total_cookies,
                entry.third_party,
                entry.score
            ));
        }

        if let Some(winner) = report.winner {
            out.push_str(&format!(
                "\nWINNER: {} (lowest score = best privacy)\n",
                winner.as_str().to_uppercase()
            ));
        }

        out
    }
}
