//! Compatibility assessment result.

use serde::{Deserialize, Serialize};

use super::CompatibilityDimension;
use crate::domain::foundation::{RecommendationTier, Score};

/// The outcome of scoring one opportunity against a profile.
///
/// A derived value: recomputed whenever the profile or opportunity
/// changes, never persisted independently of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Name of the scored opportunity.
    pub opportunity: String,
    pub overall_score: Score,
    pub recommendation: RecommendationTier,
    /// Ordered dimension breakdown; weights sum to 100.
    pub dimensions: Vec<CompatibilityDimension>,
    /// Qualitative reasoning for strong dimensions.
    pub synergies: Vec<String>,
    /// Qualitative warnings; count feeds the recommendation tier.
    pub risk_flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_camel_case() {
        let result = CompatibilityResult {
            opportunity: "Vietnam tech deal".to_string(),
            overall_score: Score::new(75.0),
            recommendation: RecommendationTier::Go,
            dimensions: vec![],
            synergies: vec!["Strong strategic fit".to_string()],
            risk_flags: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"overallScore\":75.0"));
        assert!(json.contains("\"riskFlags\":[]"));
        assert!(json.contains("\"GO\""));
    }
}
