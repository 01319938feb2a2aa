//! Scenario module - financial projection, IRR, and sensitivity.

mod assumptions;
mod engine;
mod irr;
mod projector;
mod sensitivity;

pub use assumptions::{ScenarioAssumptions, ScenarioSet};
pub use engine::{ScenarioEngine, ScenarioResult};
pub use irr::{cash_flow_series, npv, IrrMethod, IrrOutcome, IrrSettings, IrrSolver};
pub use projector::{Projection, ScenarioProjector};
pub use sensitivity::{SensitivityAnalyzer, SensitivityDelta, SensitivityVariable, DEFAULT_SHIFT};
