//! Compatibility scorer - per-dimension and overall fit computation.

use std::cmp::Ordering;

use super::{risk_alignment, CompatibilityDimension, CompatibilityResult};
use crate::domain::foundation::{
    any_term_matches, contains_term, mutual_contains, Money, RecommendationClassifier, RiskLevel,
    Score,
};
use crate::domain::profile::{EntityProfile, Opportunity};

/// Weighted contribution of each axis to the overall score. The
/// industry bonus (0 or 20) is added outside the weighted terms, so
/// the total is renormalized by 1.15.
const FINANCIAL_WEIGHT: f64 = 0.25;
const STRATEGIC_WEIGHT: f64 = 0.25;
const RISK_WEIGHT: f64 = 0.25;
const GEOGRAPHIC_WEIGHT: f64 = 0.15;
const RENORMALIZER: f64 = 1.15;

/// Deal values beyond this multiple of capacity raise a red flag.
const OVERSIZE_MULTIPLE: f64 = 1.5;

/// Compatibility scoring between an entity profile and opportunities.
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    /// Scores a single opportunity against a profile.
    pub fn score(profile: &EntityProfile, opportunity: &Opportunity) -> CompatibilityResult {
        let financial = Self::financial_alignment(profile.investment_capacity, opportunity.value);
        let strategic = Self::strategic_alignment(&profile.strategic_focus, opportunity);
        let risk = risk_alignment(profile.risk_tolerance, opportunity.risk_level);
        let geographic =
            Self::geographic_alignment(&profile.geographic_preferences, &opportunity.country);
        let industry_bonus = Self::industry_bonus(&profile.industry, &opportunity.industry);

        let overall = Self::overall(financial, strategic, risk, geographic, industry_bonus);
        let synergies = Self::synergies(profile, opportunity, financial, strategic, geographic);
        let risk_flags = Self::red_flags(profile, opportunity, strategic);

        let recommendation = RecommendationClassifier::classify(
            overall,
            opportunity.risk_level,
            risk_flags.len(),
        );

        let dimensions = Self::dimensions(
            profile,
            opportunity,
            financial,
            strategic,
            risk,
            geographic,
            industry_bonus,
        );

        CompatibilityResult {
            opportunity: opportunity.name.clone(),
            overall_score: overall,
            recommendation,
            dimensions,
            synergies,
            risk_flags,
        }
    }

    /// Scores every opportunity and sorts by descending overall score.
    /// The sort is stable, so ties keep their input order.
    pub fn score_all(
        profile: &EntityProfile,
        opportunities: &[Opportunity],
    ) -> Vec<CompatibilityResult> {
        let mut results: Vec<CompatibilityResult> = opportunities
            .iter()
            .map(|opportunity| Self::score(profile, opportunity))
            .collect();

        results.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(Ordering::Equal)
        });

        results
    }

    /// Financial alignment: penalizes deviation of deal value from
    /// investment capacity symmetrically, flooring at 0.
    ///
    /// # Edge Cases
    /// - Zero capacity: returns 0 rather than dividing by zero.
    fn financial_alignment(capacity: Money, value: Money) -> Score {
        if capacity.is_zero() {
            return Score::ZERO;
        }
        let deviation = (value.amount() - capacity.amount()).abs() / capacity.amount();
        Score::new((100.0 - deviation * 50.0).max(0.0))
    }

    /// Strategic alignment: 40 when any focus term appears in the
    /// opportunity's description or type, plus 30 for partnership-type
    /// deals (20 otherwise), capped at 100.
    fn strategic_alignment(focus: &[String], opportunity: &Opportunity) -> Score {
        let focus_match = any_term_matches(focus, &opportunity.description)
            || any_term_matches(focus, &opportunity.kind);

        let mut score: f64 = if focus_match { 40.0 } else { 0.0 };
        score += if contains_term(&opportunity.kind, "partnership") {
            30.0
        } else {
            20.0
        };

        Score::new(score.min(100.0))
    }

    /// Geographic alignment: 100 when any preference matches the
    /// opportunity country in either direction, else 30.
    fn geographic_alignment(preferences: &[String], country: &str) -> Score {
        let matched = preferences
            .iter()
            .any(|preference| mutual_contains(preference, country));
        Score::new(if matched { 100.0 } else { 30.0 })
    }

    /// Industry bonus: 20 points for an exact industry match.
    fn industry_bonus(entity_industry: &str, opportunity_industry: &str) -> f64 {
        if entity_industry.trim().eq_ignore_ascii_case(opportunity_industry.trim()) {
            20.0
        } else {
            0.0
        }
    }

    /// Overall score: weighted dimensions plus the additive industry
    /// bonus, renormalized and rounded to the nearest whole point.
    fn overall(
        financial: Score,
        strategic: Score,
        risk: Score,
        geographic: Score,
        industry_bonus: f64,
    ) -> Score {
        let weighted = FINANCIAL_WEIGHT * financial.value()
            + STRATEGIC_WEIGHT * strategic.value()
            + RISK_WEIGHT * risk.value()
            + GEOGRAPHIC_WEIGHT * geographic.value()
            + industry_bonus;
        Score::new((weighted / RENORMALIZER).round())
    }

    fn synergies(
        profile: &EntityProfile,
        opportunity: &Opportunity,
        financial: Score,
        strategic: Score,
        geographic: Score,
    ) -> Vec<String> {
        let mut synergies = Vec::new();

        if strategic.value() > 70.0 {
            synergies.push("Opportunity matches the entity's strategic focus areas".to_string());
        }
        if financial.value() > 80.0 {
            synergies.push("Deal size sits comfortably within investment capacity".to_string());
        }
        if opportunity.roi_percent > 25.0 {
            synergies.push(format!(
                "Above-target projected ROI of {:.0}%",
                opportunity.roi_percent
            ));
        }
        if geographic.value() > 80.0 {
            synergies.push(format!(
                "{} falls within preferred regions",
                opportunity.country
            ));
        }
        if profile.stage == opportunity.stage {
            synergies.push(format!(
                "Both parties are at the {} stage",
                opportunity.stage
            ));
        }

        synergies
    }

    fn red_flags(
        profile: &EntityProfile,
        opportunity: &Opportunity,
        strategic: Score,
    ) -> Vec<String> {
        let mut flags = Vec::new();

        if opportunity.value.amount()
            > OVERSIZE_MULTIPLE * profile.investment_capacity.amount()
        {
            flags.push("Deal value exceeds 1.5x investment capacity".to_string());
        }
        if opportunity.risk_level == RiskLevel::High
            && profile.risk_tolerance == RiskLevel::Low
        {
            flags.push("High-risk opportunity against a low risk tolerance".to_string());
        }
        if contains_term(&opportunity.timeline, "24") || contains_term(&opportunity.timeline, "36")
        {
            flags.push(format!(
                "Long horizon: timeline of {}",
                opportunity.timeline
            ));
        }
        if strategic.value() < 40.0 {
            flags.push("Opportunity falls outside stated strategic focus".to_string());
        }

        flags
    }

    #[allow(clippy::too_many_arguments)]
    fn dimensions(
        profile: &EntityProfile,
        opportunity: &Opportunity,
        financial: Score,
        strategic: Score,
        risk: Score,
        geographic: Score,
        industry_bonus: f64,
    ) -> Vec<CompatibilityDimension> {
        let mut financial_dim = CompatibilityDimension::new("Financial Alignment", 25.0, financial);
        if financial.value() > 80.0 {
            financial_dim = financial_dim.with_green_flag("Deal size fits capacity");
        }
        if opportunity.value.amount() > OVERSIZE_MULTIPLE * profile.investment_capacity.amount() {
            financial_dim = financial_dim.with_red_flag("Value above 1.5x capacity");
        }

        let mut strategic_dim = CompatibilityDimension::new("Strategic Alignment", 25.0, strategic);
        if strategic.value() > 70.0 {
            strategic_dim = strategic_dim.with_green_flag("Strong focus-area match");
        }
        if strategic.value() < 40.0 {
            strategic_dim = strategic_dim.with_red_flag("No focus-area match");
        }

        let mut risk_dim = CompatibilityDimension::new("Risk Alignment", 25.0, risk);
        if opportunity.risk_level == RiskLevel::High && profile.risk_tolerance == RiskLevel::Low {
            risk_dim = risk_dim.with_red_flag("Risk appetite mismatch");
        }

        let mut geographic_dim =
            CompatibilityDimension::new("Geographic Alignment", 15.0, geographic);
        if geographic.value() > 80.0 {
            geographic_dim = geographic_dim.with_green_flag("Preferred region");
        }

        // The overall formula adds the raw 20-point bonus; the display
        // dimension shows a full or empty bar.
        let industry_score = Score::new(if industry_bonus > 0.0 { 100.0 } else { 0.0 });
        let mut industry_dim = CompatibilityDimension::new("Industry Fit", 10.0, industry_score);
        if industry_bonus > 0.0 {
            industry_dim = industry_dim.with_green_flag("Same industry");
        }

        vec![
            financial_dim,
            strategic_dim,
            risk_dim,
            geographic_dim,
            industry_dim,
        ]
    }
}
