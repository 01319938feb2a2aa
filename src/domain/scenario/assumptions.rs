//! Scenario assumptions and the named scenario collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Money, RiskLevel, ValidationError};

/// Valid domain for the yearly revenue growth rate.
pub const GROWTH_RANGE: (f64, f64) = (0.0, 0.6);

/// Valid domain for the operating margin.
pub const MARGIN_RANGE: (f64, f64) = (0.0, 0.5);

/// The knobs of one financial scenario.
///
/// Immutable: slider edits go through the `with_*` methods, which
/// return new instances, so two evaluations of the same assumptions
/// always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    /// Fractional revenue growth per year.
    pub revenue_growth: f64,
    /// Fractional operating margin.
    pub operating_margin: f64,
    pub capital_investment: Money,
    pub risk_level: RiskLevel,
}

impl ScenarioAssumptions {
    /// Creates validated assumptions. Growth must be within 0-0.6 and
    /// margin within 0-0.5.
    pub fn try_new(
        revenue_growth: f64,
        operating_margin: f64,
        capital_investment: Money,
        risk_level: RiskLevel,
    ) -> Result<Self, ValidationError> {
        if !revenue_growth.is_finite() || !(GROWTH_RANGE.0..=GROWTH_RANGE.1).contains(&revenue_growth)
        {
            return Err(ValidationError::out_of_range(
                "revenue_growth",
                GROWTH_RANGE.0,
                GROWTH_RANGE.1,
                revenue_growth,
            ));
        }
        if !operating_margin.is_finite()
            || !(MARGIN_RANGE.0..=MARGIN_RANGE.1).contains(&operating_margin)
        {
            return Err(ValidationError::out_of_range(
                "operating_margin",
                MARGIN_RANGE.0,
                MARGIN_RANGE.1,
                operating_margin,
            ));
        }

        Ok(Self {
            revenue_growth,
            operating_margin,
            capital_investment,
            risk_level,
        })
    }

    /// Builds assumptions without domain checks. Reserved for internal
    /// perturbations whose results are never shown as user inputs.
    pub(crate) fn unchecked(
        revenue_growth: f64,
        operating_margin: f64,
        capital_investment: Money,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            revenue_growth,
            operating_margin,
            capital_investment,
            risk_level,
        }
    }

    /// Returns a copy with a different growth rate.
    pub fn with_revenue_growth(&self, revenue_growth: f64) -> Result<Self, ValidationError> {
        Self::try_new(
            revenue_growth,
            self.operating_margin,
            self.capital_investment,
            self.risk_level,
        )
    }

    /// Returns a copy with a different operating margin.
    pub fn with_operating_margin(&self, operating_margin: f64) -> Result<Self, ValidationError> {
        Self::try_new(
            self.revenue_growth,
            operating_margin,
            self.capital_investment,
            self.risk_level,
        )
    }

    /// Returns a copy with a different capital investment.
    pub fn with_capital_investment(&self, capital_investment: Money) -> Self {
        Self {
            capital_investment,
            ..self.clone()
        }
    }
}

/// Owned collection of named scenarios.
///
/// Replaces the dashboard's shared mutable scenario state with an
/// explicit map keyed by scenario name; updates replace whole entries
/// with new immutable assumption values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    scenarios: BTreeMap<String, ScenarioAssumptions>,
}

impl ScenarioSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three scenarios the dashboard seeds by default.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.upsert(
            "Best Case",
            ScenarioAssumptions::unchecked(0.40, 0.28, Money::new(4_000_000.0), RiskLevel::High),
        );
        set.upsert(
            "Realistic",
            ScenarioAssumptions::unchecked(0.25, 0.22, Money::new(3_000_000.0), RiskLevel::Medium),
        );
        set.upsert(
            "Worst Case",
            ScenarioAssumptions::unchecked(0.10, 0.15, Money::new(2_000_000.0), RiskLevel::Low),
        );
        set
    }

    /// Inserts or replaces a scenario, returning the previous value.
    pub fn upsert(
        &mut self,
        name: impl Into<String>,
        assumptions: ScenarioAssumptions,
    ) -> Option<ScenarioAssumptions> {
        self.scenarios.insert(name.into(), assumptions)
    }

    /// Looks up a scenario by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioAssumptions> {
        self.scenarios.get(name)
    }

    /// Removes a scenario by name.
    pub fn remove(&mut self, name: &str) -> Option<ScenarioAssumptions> {
        self.scenarios.remove(name)
    }

    /// Iterates scenarios in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ScenarioAssumptions)> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
