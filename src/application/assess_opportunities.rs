//! AssessOpportunitiesHandler - scores opportunities against a profile.

use tracing::{debug, info};

use crate::domain::compatibility::{CompatibilityResult, CompatibilityScorer};
use crate::domain::profile::{EntityProfile, Opportunity};

/// Command to assess a batch of opportunities for one entity.
#[derive(Debug, Clone)]
pub struct AssessOpportunitiesCommand {
    pub profile: EntityProfile,
    pub opportunities: Vec<Opportunity>,
}

/// Handler producing ranked compatibility results.
///
/// Stateless: the scorer is pure, so the handler only adds logging
/// around it.
#[derive(Debug, Clone, Default)]
pub struct AssessOpportunitiesHandler;

impl AssessOpportunitiesHandler {
    pub fn new() -> Self {
        Self
    }

    /// Scores every opportunity and returns results sorted by overall
    /// score, best first.
    pub fn handle(&self, command: AssessOpportunitiesCommand) -> Vec<CompatibilityResult> {
        info!(
            industry = %command.profile.industry,
            opportunity_count = command.opportunities.len(),
            "assessing opportunities"
        );

        let results = CompatibilityScorer::score_all(&command.profile, &command.opportunities);

        for result in &results {
            debug!(
                opportunity = %result.opportunity,
                score = %result.overall_score,
                recommendation = %result.recommendation,
                "scored opportunity"
            );
        }

        results
    }
}
