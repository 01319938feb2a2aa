//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, matching helpers, and error types
//! that form the vocabulary of the DealScope domain.

mod errors;
mod matching;
mod money;
mod recommendation;
mod risk;
mod score;
mod stage;

pub use errors::ValidationError;
pub use matching::{any_term_matches, contains_term, mutual_contains};
pub use money::Money;
pub use recommendation::{RecommendationClassifier, RecommendationTier};
pub use risk::RiskLevel;
pub use score::Score;
pub use stage::BusinessStage;
