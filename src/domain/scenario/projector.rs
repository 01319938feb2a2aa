//! Five-year revenue and profit projection.

use serde::{Deserialize, Serialize};

use super::ScenarioAssumptions;
use crate::domain::foundation::Money;

/// Projected revenue and profit at the sampled years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub year1_revenue: f64,
    pub year3_revenue: f64,
    pub year5_revenue: f64,
    pub year1_profit: f64,
    pub year3_profit: f64,
    pub year5_profit: f64,
    /// Net of capital investment; may be negative.
    pub cumulative_profit: f64,
}

/// Projects a scenario's assumptions over a 5-year horizon.
pub struct ScenarioProjector;

impl ScenarioProjector {
    /// Computes the projection from a shared baseline revenue.
    ///
    /// # Algorithm
    /// - year 1 uses a half-year compounding approximation:
    ///   `baseline * (1 + growth * 0.5)`
    /// - years 3 and 5 compound fully: `baseline * (1 + growth)^n`
    /// - profit at each sampled year is `revenue * margin`
    /// - cumulative profit is `y1p + 2*y3p + 2*y5p - investment`,
    ///   a coarse 5-point weighted approximation that treats years 2
    ///   and 4 as equal to years 3 and 5. It stands in for integrating
    ///   profit across the horizon and is NOT a discounted NPV.
    pub fn project(assumptions: &ScenarioAssumptions, baseline_revenue: Money) -> Projection {
        let baseline = baseline_revenue.amount();
        let growth = assumptions.revenue_growth;
        let margin = assumptions.operating_margin;

        let year1_revenue = baseline * (1.0 + growth * 0.5);
        let year3_revenue = baseline * (1.0 + growth).powi(3);
        let year5_revenue = baseline * (1.0 + growth).powi(5);

        let year1_profit = year1_revenue * margin;
        let year3_profit = year3_revenue * margin;
        let year5_profit = year5_revenue * margin;

        let cumulative_profit = year1_profit + 2.0 * year3_profit + 2.0 * year5_profit
            - assumptions.capital_investment.amount();

        Projection {
            year1_revenue,
            year3_revenue,
            year5_revenue,
            year1_profit,
            year3_profit,
            year5_profit,
            cumulative_profit,
        }
    }
}
