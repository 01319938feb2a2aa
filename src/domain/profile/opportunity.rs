//! Opportunity - a candidate deal or partner to score.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessStage, Money, RiskLevel, ValidationError};

/// A listed opportunity. Immutable once built; many opportunities are
/// scored against one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub value: Money,
    pub risk_level: RiskLevel,
    /// Opportunity type label ("strategic partnership", "acquisition", ...).
    /// Free text, substring-matched during scoring.
    pub kind: String,
    pub description: String,
    pub country: String,
    pub industry: String,
    pub stage: BusinessStage,
    /// Projected return on investment, in percent.
    pub roi_percent: f64,
    /// Free-text horizon, e.g. "12-18 months".
    pub timeline: String,
}

impl Opportunity {
    /// Creates a validated opportunity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        value: Money,
        risk_level: RiskLevel,
        kind: impl Into<String>,
        description: impl Into<String>,
        country: impl Into<String>,
        industry: impl Into<String>,
        stage: BusinessStage,
        roi_percent: f64,
        timeline: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !roi_percent.is_finite() || roi_percent < 0.0 {
            return Err(ValidationError::out_of_range(
                "roi_percent",
                0.0,
                f64::MAX,
                roi_percent,
            ));
        }

        Ok(Self {
            name,
            value,
            risk_level,
            kind: kind.into(),
            description: description.into(),
            country: country.into(),
            industry: industry.into(),
            stage,
            roi_percent,
            timeline: timeline.into(),
        })
    }
}
