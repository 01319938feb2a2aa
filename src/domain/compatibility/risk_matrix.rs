//! Risk alignment lookup table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{RiskLevel, Score};

/// Alignment score keyed by (entity tolerance, opportunity risk).
///
/// Same-level pairs score 100, one-step-apart pairs 50-70, opposite
/// extremes 20-40. The table is asymmetric: an over-cautious entity
/// facing a high-risk deal (20) scores lower than a high-tolerance
/// entity facing a low-risk deal (40), because the former carries the
/// exposure and the latter merely leaves upside on the table.
static RISK_ALIGNMENT: Lazy<HashMap<(RiskLevel, RiskLevel), f64>> = Lazy::new(|| {
    use RiskLevel::{High, Low, Medium};
    HashMap::from([
        ((Low, Low), 100.0),
        ((Low, Medium), 50.0),
        ((Low, High), 20.0),
        ((Medium, Low), 70.0),
        ((Medium, Medium), 100.0),
        ((Medium, High), 60.0),
        ((High, Low), 40.0),
        ((High, Medium), 70.0),
        ((High, High), 100.0),
    ])
});

/// Looks up the risk alignment score for a tolerance/risk pair.
pub fn risk_alignment(tolerance: RiskLevel, risk: RiskLevel) -> Score {
    // The table covers all nine pairs; the fallback is unreachable.
    let value = RISK_ALIGNMENT.get(&(tolerance, risk)).copied().unwrap_or(0.0);
    Score::new(value)
}
