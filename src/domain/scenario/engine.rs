//! Scenario evaluation - projection, IRR, payback, and the verdict.

use serde::{Deserialize, Serialize};

use super::{cash_flow_series, IrrSettings, IrrSolver, ScenarioAssumptions, ScenarioProjector, ScenarioSet};
use crate::domain::foundation::{Money, RecommendationClassifier, RecommendationTier, RiskLevel, Score};

/// Everything the dashboard shows for one evaluated scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: String,
    pub year1_revenue: f64,
    pub year3_revenue: f64,
    pub year5_revenue: f64,
    pub cumulative_profit: f64,
    pub irr_percent: f64,
    pub irr_converged: bool,
    /// Years to recover the capital investment, rounded to one decimal.
    pub payback_years: f64,
    pub risk_score: Score,
    pub recommendation: RecommendationTier,
}

/// Evaluates scenarios end to end: project, solve IRR, score risk,
/// and classify.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    irr: IrrSettings,
}

impl ScenarioEngine {
    pub fn new(irr: IrrSettings) -> Self {
        Self { irr }
    }

    /// Evaluates one scenario against a shared baseline revenue.
    ///
    /// # Algorithm
    /// - project revenue and profit over the 5-year horizon
    /// - solve IRR on the sampled profit series against the outlay
    /// - payback = investment / max(year-1 profit, 1), one decimal
    /// - risk score maps High to 75, Medium to 50, Low to 25
    /// - the verdict reuses the recommendation ladder, scored from the
    ///   IRR percentage (doubled, clamped to 0-100) and flagged on a
    ///   negative cumulative profit or a payback beyond 5 years
    pub fn evaluate(
        &self,
        name: &str,
        assumptions: &ScenarioAssumptions,
        baseline_revenue: Money,
    ) -> ScenarioResult {
        let projection = ScenarioProjector::project(assumptions, baseline_revenue);
        let flows = cash_flow_series(&projection);
        let investment = assumptions.capital_investment.amount();
        let irr = IrrSolver::solve(investment, &flows, &self.irr);

        let payback_years = Self::payback_years(investment, projection.year1_profit);
        let risk_score = Self::risk_score(assumptions.risk_level);

        let mut red_flags = 0;
        if projection.cumulative_profit < 0.0 {
            red_flags += 1;
        }
        if payback_years > 5.0 {
            red_flags += 1;
        }
        let recommendation = RecommendationClassifier::classify(
            Score::new(irr.rate_percent * 2.0),
            assumptions.risk_level,
            red_flags,
        );

        ScenarioResult {
            name: name.to_string(),
            year1_revenue: projection.year1_revenue,
            year3_revenue: projection.year3_revenue,
            year5_revenue: projection.year5_revenue,
            cumulative_profit: projection.cumulative_profit,
            irr_percent: irr.rate_percent,
            irr_converged: irr.converged,
            payback_years,
            risk_score,
            recommendation,
        }
    }

    /// Evaluates a whole set, in name order.
    pub fn evaluate_set(&self, set: &ScenarioSet, baseline_revenue: Money) -> Vec<ScenarioResult> {
        set.iter()
            .map(|(name, assumptions)| self.evaluate(name, assumptions, baseline_revenue))
            .collect()
    }

    /// The max(..., 1) floor keeps a zero-profit year 1 from dividing
    /// by zero; the resulting payback is the raw investment figure.
    fn payback_years(investment: f64, year1_profit: f64) -> f64 {
        let years = investment / year1_profit.max(1.0);
        (years * 10.0).round() / 10.0
    }

    fn risk_score(level: RiskLevel) -> Score {
        let value = match level {
            RiskLevel::High => 75.0,
            RiskLevel::Medium => 50.0,
            RiskLevel::Low => 25.0,
        };
        Score::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::IrrMethod;

    const BASELINE: Money = Money::ZERO;

    fn baseline() -> Money {
        Money::new(10_000_000.0)
    }

    fn realistic() -> ScenarioAssumptions {
        ScenarioAssumptions::try_new(0.25, 0.22, Money::new(3_000_000.0), RiskLevel::Medium)
            .unwrap()
    }

    fn bisection_engine() -> ScenarioEngine {
        ScenarioEngine::new(IrrSettings {
            method: IrrMethod::Bisection,
            ..IrrSettings::default()
        })
    }

    #[test]
    fn realistic_scenario_matches_worked_figures() {
        let result = ScenarioEngine::default().evaluate("Realistic", &realistic(), baseline());

        assert!((result.year1_revenue - 11_250_000.0).abs() < 1e-6);
        assert!((result.year3_revenue - 19_531_250.0).abs() < 1e-6);
        assert!((result.year5_revenue - 30_517_578.125).abs() < 1e-6);
        assert!((result.cumulative_profit - 21_496_484.375).abs() < 1e-6);
        // 3M / 2,475,000 = 1.2121..., rounded to one decimal.
        assert_eq!(result.payback_years, 1.2);
    }

    #[test]
    fn risk_score_maps_each_level() {
        let engine = ScenarioEngine::default();
        for (level, expected) in [
            (RiskLevel::High, 75.0),
            (RiskLevel::Medium, 50.0),
            (RiskLevel::Low, 25.0),
        ] {
            let assumptions =
                ScenarioAssumptions::try_new(0.25, 0.22, Money::new(3_000_000.0), level).unwrap();
            let result = engine.evaluate("s", &assumptions, baseline());
            assert_eq!(result.risk_score.value(), expected);
        }
    }

    #[test]
    fn payback_survives_zero_profit() {
        let engine = ScenarioEngine::default();
        let assumptions =
            ScenarioAssumptions::try_new(0.25, 0.0, Money::new(3_000_000.0), RiskLevel::Medium)
                .unwrap();
        let result = engine.evaluate("no-margin", &assumptions, baseline());

        // Profit floors at 1, so payback is the raw investment figure.
        assert_eq!(result.payback_years, 3_000_000.0);
        assert!(result.payback_years.is_finite());
    }

    #[test]
    fn strong_scenario_earns_strong_go_under_bisection() {
        // Realistic at medium risk: IRR is well past 40%, cumulative
        // profit is positive, and payback is 1.2 years.
        let result = bisection_engine().evaluate("Realistic", &realistic(), baseline());

        assert!(result.irr_converged);
        assert_eq!(result.recommendation, RecommendationTier::StrongGo);
    }

    #[test]
    fn high_risk_scenario_cannot_be_strong_go() {
        let assumptions =
            ScenarioAssumptions::try_new(0.40, 0.28, Money::new(4_000_000.0), RiskLevel::High)
                .unwrap();
        let result = bisection_engine().evaluate("Best Case", &assumptions, baseline());

        assert!(result.irr_converged);
        assert_ne!(result.recommendation, RecommendationTier::StrongGo);
    }

    #[test]
    fn loss_making_scenario_falls_to_pass() {
        let assumptions =
            ScenarioAssumptions::try_new(0.0, 0.01, Money::new(50_000_000.0), RiskLevel::High)
                .unwrap();
        let result = bisection_engine().evaluate("sinkhole", &assumptions, Money::new(100_000.0));

        assert!(result.cumulative_profit < 0.0);
        assert!(result.payback_years > 5.0);
        assert_eq!(result.recommendation, RecommendationTier::Pass);
    }

    #[test]
    fn evaluate_set_returns_results_in_name_order() {
        let results = ScenarioEngine::default().evaluate_set(&ScenarioSet::standard(), baseline());

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Best Case", "Realistic", "Worst Case"]);
    }

    #[test]
    fn default_engine_reports_legacy_divergence() {
        // Multi-million NPVs overwhelm the legacy fixed step; the
        // result still carries finite figures but flags the IRR.
        let result = ScenarioEngine::default().evaluate("Realistic", &realistic(), baseline());

        assert!(!result.irr_converged);
        assert!(result.irr_percent.is_finite());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = bisection_engine();
        let a = engine.evaluate("Realistic", &realistic(), baseline());
        let b = engine.evaluate("Realistic", &realistic(), baseline());
        assert_eq!(a, b);
    }

    #[test]
    fn zero_baseline_produces_zero_revenue() {
        let result = ScenarioEngine::default().evaluate("empty", &realistic(), BASELINE);
        assert_eq!(result.year1_revenue, 0.0);
        assert_eq!(result.year5_revenue, 0.0);
        assert!(result.cumulative_profit < 0.0);
    }
}
