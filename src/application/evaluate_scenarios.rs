//! EvaluateScenariosHandler - runs the scenario engine and, when a
//! reference scenario is named, the sensitivity analysis.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::foundation::Money;
use crate::domain::scenario::{
    ScenarioEngine, ScenarioResult, ScenarioSet, SensitivityAnalyzer, SensitivityDelta,
};

/// Command to evaluate a set of scenarios.
#[derive(Debug, Clone)]
pub struct EvaluateScenariosCommand {
    pub scenarios: ScenarioSet,
    /// Scenario to center the sensitivity analysis on, if any.
    pub reference: Option<String>,
}

/// Evaluated scenarios plus the optional sensitivity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvaluation {
    pub results: Vec<ScenarioResult>,
    pub sensitivity: Vec<SensitivityDelta>,
}

/// Handler owning the engine and the shared modeling inputs.
#[derive(Debug, Clone)]
pub struct EvaluateScenariosHandler {
    engine: ScenarioEngine,
    baseline_revenue: Money,
    sensitivity_shift: f64,
}

impl EvaluateScenariosHandler {
    pub fn new(engine: ScenarioEngine, baseline_revenue: Money, sensitivity_shift: f64) -> Self {
        Self {
            engine,
            baseline_revenue,
            sensitivity_shift,
        }
    }

    /// Evaluates every scenario in name order. A missing reference
    /// scenario is logged and yields an empty sensitivity table rather
    /// than an error, matching how the dashboard degrades.
    pub fn handle(&self, command: EvaluateScenariosCommand) -> ScenarioEvaluation {
        info!(
            scenario_count = command.scenarios.len(),
            baseline_revenue = %self.baseline_revenue,
            "evaluating scenarios"
        );

        let results = self
            .engine
            .evaluate_set(&command.scenarios, self.baseline_revenue);

        let sensitivity = match command.reference.as_deref() {
            Some(name) => match command.scenarios.get(name) {
                Some(reference) => SensitivityAnalyzer::analyze(
                    reference,
                    self.baseline_revenue,
                    self.sensitivity_shift,
                ),
                None => {
                    warn!(reference = name, "reference scenario not found");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        ScenarioEvaluation {
            results,
            sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::DEFAULT_SHIFT;

    fn handler() -> EvaluateScenariosHandler {
        EvaluateScenariosHandler::new(
            ScenarioEngine::default(),
            Money::new(10_000_000.0),
            DEFAULT_SHIFT,
        )
    }

    #[test]
    fn evaluates_every_scenario() {
        let evaluation = handler().handle(EvaluateScenariosCommand {
            scenarios: ScenarioSet::standard(),
            reference: None,
        });

        assert_eq!(evaluation.results.len(), 3);
        assert!(evaluation.sensitivity.is_empty());
    }

    #[test]
    fn reference_scenario_drives_sensitivity() {
        let evaluation = handler().handle(EvaluateScenariosCommand {
            scenarios: ScenarioSet::standard(),
            reference: Some("Realistic".to_string()),
        });

        assert_eq!(evaluation.sensitivity.len(), 3);
    }

    #[test]
    fn unknown_reference_degrades_to_empty_sensitivity() {
        let evaluation = handler().handle(EvaluateScenariosCommand {
            scenarios: ScenarioSet::standard(),
            reference: Some("Moonshot".to_string()),
        });

        assert_eq!(evaluation.results.len(), 3);
        assert!(evaluation.sensitivity.is_empty());
    }

    #[test]
    fn empty_set_is_not_an_error() {
        let evaluation = handler().handle(EvaluateScenariosCommand {
            scenarios: ScenarioSet::new(),
            reference: None,
        });
        assert!(evaluation.results.is_empty());
    }
}
