//! Property tests over the scoring and projection math.

use proptest::prelude::*;

use dealscope::domain::foundation::{
    BusinessStage, Money, RecommendationClassifier, RiskLevel, Score,
};
use dealscope::domain::profile::{EntityProfile, Opportunity};
use dealscope::domain::compatibility::CompatibilityScorer;
use dealscope::domain::scenario::{
    ScenarioAssumptions, ScenarioProjector, SensitivityAnalyzer, DEFAULT_SHIFT,
};

fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

fn arb_opportunity() -> impl Strategy<Value = Opportunity> {
    (
        0.0..50_000_000.0f64,
        arb_risk(),
        0.0..100.0f64,
        "[a-z]{3,12}",
        "[a-z]{3,12}",
    )
        .prop_map(|(value, risk, roi, country, industry)| {
            Opportunity::new(
                "generated deal",
                Money::new(value),
                risk,
                "partnership",
                "generated description",
                country,
                industry,
                BusinessStage::Growth,
                roi,
                "12 months",
            )
            .unwrap()
        })
}

fn fixed_profile() -> EntityProfile {
    EntityProfile::new(
        "technology",
        "Singapore",
        BusinessStage::Growth,
        Money::new(10_000_000.0),
        RiskLevel::Medium,
        vec!["Asia".to_string()],
        vec!["technology".to_string()],
    )
    .unwrap()
}

proptest! {
    #[test]
    fn scores_always_land_in_range(value in proptest::num::f64::ANY) {
        let score = Score::new(value);
        prop_assert!((0.0..=100.0).contains(&score.value()));
    }

    #[test]
    fn overall_score_is_bounded(opportunity in arb_opportunity()) {
        let result = CompatibilityScorer::score(&fixed_profile(), &opportunity);
        let overall = result.overall_score.value();
        prop_assert!((0.0..=100.0).contains(&overall));
    }

    #[test]
    fn classifier_is_monotone_in_score(
        low in 0.0..100.0f64,
        delta in 0.0..100.0f64,
        risk in arb_risk(),
        flags in 0usize..4,
    ) {
        let high = (low + delta).min(100.0);
        let at_low = RecommendationClassifier::classify(Score::new(low), risk, flags);
        let at_high = RecommendationClassifier::classify(Score::new(high), risk, flags);
        // A higher score with identical context never worsens the tier.
        prop_assert!(at_high.rank() >= at_low.rank());
    }

    #[test]
    fn ranking_is_sorted_descending(opportunities in prop::collection::vec(arb_opportunity(), 0..8)) {
        let results = CompatibilityScorer::score_all(&fixed_profile(), &opportunities);
        for pair in results.windows(2) {
            prop_assert!(pair[0].overall_score >= pair[1].overall_score);
        }
    }

    #[test]
    fn year5_revenue_is_monotone_in_growth(
        growth in 0.0..0.5f64,
        bump in 0.0..0.1f64,
        margin in 0.0..0.5f64,
    ) {
        let slower = ScenarioAssumptions::try_new(growth, margin, Money::ZERO, RiskLevel::Medium).unwrap();
        let faster =
            ScenarioAssumptions::try_new(growth + bump, margin, Money::ZERO, RiskLevel::Medium).unwrap();

        let baseline = Money::new(10_000_000.0);
        let slow = ScenarioProjector::project(&slower, baseline);
        let fast = ScenarioProjector::project(&faster, baseline);
        prop_assert!(fast.year5_revenue >= slow.year5_revenue);
    }

    #[test]
    fn margin_sensitivity_is_antisymmetric(
        growth in 0.01..0.6f64,
        margin in 0.05..0.5f64,
        investment in 0.0..10_000_000.0f64,
    ) {
        let reference =
            ScenarioAssumptions::try_new(growth, margin, Money::new(investment), RiskLevel::Medium).unwrap();
        let deltas =
            SensitivityAnalyzer::analyze(&reference, Money::new(10_000_000.0), DEFAULT_SHIFT);

        // Cumulative profit is linear in margin, so the up and down
        // shifts mirror each other.
        let margin_delta = &deltas[1];
        let scale = margin_delta.upside_delta.abs().max(1.0);
        prop_assert!((margin_delta.upside_delta + margin_delta.downside_delta).abs() / scale < 1e-9);
    }
}
