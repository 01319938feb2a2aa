//! Recommendation tiers and the shared score-to-tier classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{RiskLevel, Score};

/// Discrete Go/No-Go recommendation derived from a continuous score
/// plus qualitative flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    StrongGo,
    Go,
    Consider,
    Pass,
}

impl RecommendationTier {
    /// Ordinal rank, 0 (Pass) to 3 (StrongGo). Higher is better.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Consider => 1,
            Self::Go => 2,
            Self::StrongGo => 3,
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongGo => write!(f, "STRONG_GO"),
            Self::Go => write!(f, "GO"),
            Self::Consider => write!(f, "CONSIDER"),
            Self::Pass => write!(f, "PASS"),
        }
    }
}

/// Maps a score and auxiliary flags to a recommendation tier.
///
/// Used by both the compatibility scorer and the scenario engine, so
/// both surfaces grade on the same ladder:
/// - score >= 80 and risk is not High -> StrongGo
/// - score >= 70 and no red flags -> Go
/// - score >= 60 and at most one red flag -> Consider
/// - otherwise -> Pass
///
/// For a fixed risk level and flag count the tier is monotonic in the
/// score: raising the score never downgrades the recommendation.
pub struct RecommendationClassifier;

impl RecommendationClassifier {
    /// Classifies a score with its accompanying risk level and red-flag
    /// count.
    pub fn classify(score: Score, risk_level: RiskLevel, red_flag_count: usize) -> RecommendationTier {
        let value = score.value();

        if value >= 80.0 && risk_level != RiskLevel::High {
            return RecommendationTier::StrongGo;
        }
        if value >= 70.0 && red_flag_count == 0 {
            return RecommendationTier::Go;
        }
        if value >= 60.0 && red_flag_count <= 1 {
            return RecommendationTier::Consider;
        }
        RecommendationTier::Pass
    }
}
