//! One-at-a-time sensitivity analysis around a reference scenario.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ScenarioAssumptions, ScenarioProjector};
use crate::domain::foundation::Money;

/// Default relative shift applied to each driver.
pub const DEFAULT_SHIFT: f64 = 0.10;

/// The three drivers the analysis perturbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensitivityVariable {
    RevenueGrowth,
    OperatingMargin,
    CapitalInvestment,
}

impl SensitivityVariable {
    pub const ALL: [SensitivityVariable; 3] = [
        SensitivityVariable::RevenueGrowth,
        SensitivityVariable::OperatingMargin,
        SensitivityVariable::CapitalInvestment,
    ];
}

impl fmt::Display for SensitivityVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SensitivityVariable::RevenueGrowth => "Revenue Growth",
            SensitivityVariable::OperatingMargin => "Operating Margin",
            SensitivityVariable::CapitalInvestment => "Capital Investment",
        };
        f.write_str(label)
    }
}

/// Cumulative-profit change when one driver moves by the shift,
/// everything else held at the reference values. Raw currency, signed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityDelta {
    pub variable: SensitivityVariable,
    /// Driver shifted up by the relative shift.
    pub upside_delta: f64,
    /// Driver shifted down by the relative shift.
    pub downside_delta: f64,
}

/// Tornado-style analysis: perturb each driver one at a time and
/// report the swing in cumulative profit.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Perturbs each driver by `±shift` (relative) around the
    /// reference assumptions and reports cumulative-profit deltas.
    ///
    /// Perturbed values may leave the sliders' input domains (a 0.55
    /// growth shifted up lands at 0.605); that is fine for what-if
    /// deltas, so the perturbations skip input validation.
    pub fn analyze(
        reference: &ScenarioAssumptions,
        baseline_revenue: Money,
        shift: f64,
    ) -> Vec<SensitivityDelta> {
        let base = ScenarioProjector::project(reference, baseline_revenue).cumulative_profit;

        SensitivityVariable::ALL
            .iter()
            .map(|&variable| {
                let up = Self::perturbed(reference, variable, 1.0 + shift);
                let down = Self::perturbed(reference, variable, 1.0 - shift);
                SensitivityDelta {
                    variable,
                    upside_delta: ScenarioProjector::project(&up, baseline_revenue)
                        .cumulative_profit
                        - base,
                    downside_delta: ScenarioProjector::project(&down, baseline_revenue)
                        .cumulative_profit
                        - base,
                }
            })
            .collect()
    }

    fn perturbed(
        reference: &ScenarioAssumptions,
        variable: SensitivityVariable,
        factor: f64,
    ) -> ScenarioAssumptions {
        match variable {
            SensitivityVariable::RevenueGrowth => ScenarioAssumptions::unchecked(
                reference.revenue_growth * factor,
                reference.operating_margin,
                reference.capital_investment,
                reference.risk_level,
            ),
            SensitivityVariable::OperatingMargin => ScenarioAssumptions::unchecked(
                reference.revenue_growth,
                reference.operating_margin * factor,
                reference.capital_investment,
                reference.risk_level,
            ),
            SensitivityVariable::CapitalInvestment => ScenarioAssumptions::unchecked(
                reference.revenue_growth,
                reference.operating_margin,
                Money::new(reference.capital_investment.amount() * factor),
                reference.risk_level,
            ),
        }
    }
}
