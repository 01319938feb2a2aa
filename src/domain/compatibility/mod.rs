//! Compatibility module - entity/opportunity fit scoring.

mod dimension;
mod result;
mod risk_matrix;
mod scorer;

pub use dimension::{validate_weights, CompatibilityDimension};
pub use result::CompatibilityResult;
pub use risk_matrix::risk_alignment;
pub use scorer::CompatibilityScorer;
