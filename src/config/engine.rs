//! Engine configuration - modeling knobs for the decision engines.

use serde::Deserialize;

use super::ValidationError;
use crate::domain::scenario::{IrrMethod, IrrSettings};

/// Tunables for the scenario and sensitivity engines.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Shared current-year revenue all scenarios project from.
    #[serde(default = "default_baseline_revenue")]
    pub baseline_revenue: f64,

    /// Which IRR algorithm to run.
    #[serde(default)]
    pub irr_method: IrrMethod,

    /// Iteration cap for the legacy IRR search.
    #[serde(default = "default_irr_max_iterations")]
    pub irr_max_iterations: u32,

    /// Absolute NPV below which the legacy IRR search stops.
    #[serde(default = "default_irr_npv_tolerance")]
    pub irr_npv_tolerance: f64,

    /// Relative shift the sensitivity analysis applies to each driver.
    #[serde(default = "default_sensitivity_shift")]
    pub sensitivity_shift: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline_revenue: default_baseline_revenue(),
            irr_method: IrrMethod::default(),
            irr_max_iterations: default_irr_max_iterations(),
            irr_npv_tolerance: default_irr_npv_tolerance(),
            sensitivity_shift: default_sensitivity_shift(),
        }
    }
}

impl EngineConfig {
    /// The IRR solver settings this configuration describes.
    pub fn irr_settings(&self) -> IrrSettings {
        IrrSettings {
            method: self.irr_method,
            max_iterations: self.irr_max_iterations,
            npv_tolerance: self.irr_npv_tolerance,
        }
    }

    /// Validate engine configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.baseline_revenue.is_finite() || self.baseline_revenue <= 0.0 {
            return Err(ValidationError::NonPositiveBaselineRevenue);
        }
        if self.irr_max_iterations == 0 || self.irr_max_iterations > 10_000 {
            return Err(ValidationError::InvalidIterationBound);
        }
        if !self.irr_npv_tolerance.is_finite() || self.irr_npv_tolerance <= 0.0 {
            return Err(ValidationError::NonPositiveNpvTolerance);
        }
        if !self.sensitivity_shift.is_finite()
            || self.sensitivity_shift <= 0.0
            || self.sensitivity_shift > 1.0
        {
            return Err(ValidationError::InvalidSensitivityShift);
        }
        Ok(())
    }
}

fn default_baseline_revenue() -> f64 {
    10_000_000.0
}

fn default_irr_max_iterations() -> u32 {
    100
}

fn default_irr_npv_tolerance() -> f64 {
    1000.0
}

fn default_sensitivity_shift() -> f64 {
    0.10
}
