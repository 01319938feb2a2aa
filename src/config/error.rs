//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Baseline revenue must be positive and finite")]
    NonPositiveBaselineRevenue,

    #[error("IRR iteration cap must be between 1 and 10000")]
    InvalidIterationBound,

    #[error("IRR NPV tolerance must be positive and finite")]
    NonPositiveNpvTolerance,

    #[error("Sensitivity shift must be within (0, 1]")]
    InvalidSensitivityShift,
}
