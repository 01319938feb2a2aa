//! Entity profile - the user-entered business parameters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BusinessStage, Money, RiskLevel, ValidationError};

/// The profile of the entity seeking partnerships or investments.
///
/// Created from form input and edited interactively. Edit methods
/// return updated copies so scoring functions never observe a profile
/// changing underneath them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProfile {
    pub industry: String,
    pub country: String,
    pub stage: BusinessStage,
    pub investment_capacity: Money,
    pub risk_tolerance: RiskLevel,
    /// Region names the entity prefers to operate in.
    pub geographic_preferences: Vec<String>,
    /// Focus-area labels matched against opportunity text.
    pub strategic_focus: Vec<String>,
}

impl EntityProfile {
    /// Creates a validated profile. Industry and country must be
    /// non-empty; numeric fields are non-negative by construction.
    pub fn new(
        industry: impl Into<String>,
        country: impl Into<String>,
        stage: BusinessStage,
        investment_capacity: Money,
        risk_tolerance: RiskLevel,
        geographic_preferences: Vec<String>,
        strategic_focus: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let industry = industry.into();
        let country = country.into();

        if industry.trim().is_empty() {
            return Err(ValidationError::empty_field("industry"));
        }
        if country.trim().is_empty() {
            return Err(ValidationError::empty_field("country"));
        }

        Ok(Self {
            industry,
            country,
            stage,
            investment_capacity,
            risk_tolerance,
            geographic_preferences,
            strategic_focus,
        })
    }

    /// Returns a copy with a different investment capacity.
    pub fn with_investment_capacity(&self, capacity: Money) -> Self {
        Self {
            investment_capacity: capacity,
            ..self.clone()
        }
    }

    /// Returns a copy with a different risk tolerance.
    pub fn with_risk_tolerance(&self, tolerance: RiskLevel) -> Self {
        Self {
            risk_tolerance: tolerance,
            ..self.clone()
        }
    }

    /// Returns a copy with replaced strategic focus areas.
    pub fn with_strategic_focus(&self, focus: Vec<String>) -> Self {
        Self {
            strategic_focus: focus,
            ..self.clone()
        }
    }

    /// Returns a copy with replaced geographic preferences.
    pub fn with_geographic_preferences(&self, preferences: Vec<String>) -> Self {
        Self {
            geographic_preferences: preferences,
            ..self.clone()
        }
    }
}
