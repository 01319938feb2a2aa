//! Application layer - commands and handlers orchestrating the
//! domain engines.

mod assess_opportunities;
mod evaluate_scenarios;

pub use assess_opportunities::{AssessOpportunitiesCommand, AssessOpportunitiesHandler};
pub use evaluate_scenarios::{
    EvaluateScenariosCommand, EvaluateScenariosHandler, ScenarioEvaluation,
};
