//! Business maturity stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maturity stage of an entity or opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStage {
    PreLaunch,
    EarlyStage,
    Growth,
    Expansion,
    Mature,
}

impl fmt::Display for BusinessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreLaunch => write!(f, "Pre-Launch"),
            Self::EarlyStage => write!(f, "Early Stage"),
            Self::Growth => write!(f, "Growth"),
            Self::Expansion => write!(f, "Expansion"),
            Self::Mature => write!(f, "Mature"),
        }
    }
}
