//! Compatibility dimension - one weighted axis of an assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, ValidationError};

/// One weighted axis (financial, strategic, risk, geographic, industry
/// fit) contributing to an overall compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityDimension {
    pub name: String,
    /// Display weight in percent. The dimensions of one assessment
    /// must sum to 100.
    pub weight: f64,
    pub score: Score,
    pub green_flags: Vec<String>,
    pub red_flags: Vec<String>,
}

impl CompatibilityDimension {
    /// Creates a dimension with no flags.
    pub fn new(name: impl Into<String>, weight: f64, score: Score) -> Self {
        Self {
            name: name.into(),
            weight,
            score,
            green_flags: Vec::new(),
            red_flags: Vec::new(),
        }
    }

    /// Adds a green flag and returns the dimension.
    pub fn with_green_flag(mut self, flag: impl Into<String>) -> Self {
        self.green_flags.push(flag.into());
        self
    }

    /// Adds a red flag and returns the dimension.
    pub fn with_red_flag(mut self, flag: impl Into<String>) -> Self {
        self.red_flags.push(flag.into());
        self
    }
}

/// Checks that the weights of one assessment's dimensions sum to 100.
pub fn validate_weights(dimensions: &[CompatibilityDimension]) -> Result<(), ValidationError> {
    let sum: f64 = dimensions.iter().map(|d| d.weight).sum();
    if (sum - 100.0).abs() > 1e-6 {
        return Err(ValidationError::out_of_range(
            "dimension weights",
            100.0,
            100.0,
            sum,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_builder_collects_flags() {
        let dim = CompatibilityDimension::new("Financial Alignment", 25.0, Score::new(75.0))
            .with_green_flag("Deal size fits capacity")
            .with_red_flag("Long horizon");

        assert_eq!(dim.green_flags.len(), 1);
        assert_eq!(dim.red_flags.len(), 1);
        assert_eq!(dim.score.value(), 75.0);
    }

    #[test]
    fn weights_summing_to_100_validate() {
        let dims = vec![
            CompatibilityDimension::new("A", 25.0, Score::ZERO),
            CompatibilityDimension::new("B", 25.0, Score::ZERO),
            CompatibilityDimension::new("C", 25.0, Score::ZERO),
            CompatibilityDimension::new("D", 15.0, Score::ZERO),
            CompatibilityDimension::new("E", 10.0, Score::ZERO),
        ];
        assert!(validate_weights(&dims).is_ok());
    }

    #[test]
    fn weights_not_summing_to_100_fail() {
        let dims = vec![
            CompatibilityDimension::new("A", 60.0, Score::ZERO),
            CompatibilityDimension::new("B", 30.0, Score::ZERO),
        ];
        assert!(validate_weights(&dims).is_err());
    }

    #[test]
    fn dimension_serializes_camel_case() {
        let dim = CompatibilityDimension::new("Risk Alignment", 25.0, Score::new(60.0));
        let json = serde_json::to_string(&dim).unwrap();
        assert!(json.contains("\"greenFlags\""));
        assert!(json.contains("\"redFlags\""));
    }
}
