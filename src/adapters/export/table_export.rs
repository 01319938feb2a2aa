//! TableExporter - in-memory structured table rendering.
//!
//! Renders engine output as header-plus-rows tables. Every cell is its
//! own string; callers that want CSV or a TUI grid do their own
//! joining and quoting.

use crate::domain::compatibility::CompatibilityResult;
use crate::domain::scenario::{ScenarioResult, SensitivityDelta};
use crate::ports::{ExportService, ExportTable};

/// Structured table renderer for the engines' results.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExporter;

impl TableExporter {
    pub fn new() -> Self {
        Self
    }

    fn currency(value: f64) -> String {
        format!("{value:.2}")
    }

    fn percent(value: f64) -> String {
        format!("{value:.2}%")
    }
}

impl ExportService for TableExporter {
    fn compatibility_table(&self, results: &[CompatibilityResult]) -> ExportTable {
        let mut table = ExportTable::new(vec![
            "Opportunity".to_string(),
            "Overall Score".to_string(),
            "Recommendation".to_string(),
            "Synergies".to_string(),
            "Risk Flags".to_string(),
        ]);

        for result in results {
            table.push_row(vec![
                result.opportunity.clone(),
                result.overall_score.to_string(),
                result.recommendation.to_string(),
                result.synergies.len().to_string(),
                result.risk_flags.len().to_string(),
            ]);
        }
        table
    }

    fn scenario_table(&self, results: &[ScenarioResult]) -> ExportTable {
        let mut table = ExportTable::new(vec![
            "Scenario".to_string(),
            "Year 1 Revenue".to_string(),
            "Year 5 Revenue".to_string(),
            "Cumulative Profit".to_string(),
            "IRR".to_string(),
            "Payback (Years)".to_string(),
            "Recommendation".to_string(),
        ]);

        for result in results {
            let irr = if result.irr_converged {
                Self::percent(result.irr_percent)
            } else {
                // A non-converged rate is an estimate, not a figure.
                format!("~{} (not converged)", Self::percent(result.irr_percent))
            };
            table.push_row(vec![
                result.name.clone(),
                Self::currency(result.year1_revenue),
                Self::currency(result.year5_revenue),
                Self::currency(result.cumulative_profit),
                irr,
                format!("{:.1}", result.payback_years),
                result.recommendation.to_string(),
            ]);
        }
        table
    }

    fn sensitivity_table(&self, deltas: &[SensitivityDelta]) -> ExportTable {
        let mut table = ExportTable::new(vec![
            "Driver".to_string(),
            "Upside Delta".to_string(),
            "Downside Delta".to_string(),
        ]);

        for delta in deltas {
            table.push_row(vec![
                delta.variable.to_string(),
                Self::currency(delta.upside_delta),
                Self::currency(delta.downside_delta),
            ]);
        }
        table
    }
}
