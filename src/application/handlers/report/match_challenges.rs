//! MatchChallenges - Query handler for challenges of a like/talent pairing.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::Challenge;
use crate::domain::challenge::{ChallengeKey, ChallengeMatcher};
use crate::domain::foundation::{DomainError, ElementId};
use crate::ports::CatalogSource;

/// Query by the full 4-part key.
#[derive(Debug, Clone, Copy)]
pub struct MatchChallengesQuery {
    pub like_id: ElementId,
    pub talent_id: ElementId,
    pub like_obvious: bool,
    pub talent_obvious: bool,
}

impl From<MatchChallengesQuery> for ChallengeKey {
    fn from(q: MatchChallengesQuery) -> Self {
        ChallengeKey::new(q.like_id, q.talent_id, q.like_obvious, q.talent_obvious)
    }
}

/// Matching challenges plus their coping strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchChallengesResult {
    pub challenges: Vec<Challenge>,
    /// Non-blank strategy texts, in challenge order.
    pub strategies: Vec<String>,
}

/// Handler for challenge lookup.
pub struct MatchChallengesHandler {
    catalog: Arc<dyn CatalogSource>,
}

impl MatchChallengesHandler {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    /// Matching challenges in catalog order; empty when nothing matches.
    pub async fn handle(
        &self,
        query: MatchChallengesQuery,
    ) -> Result<MatchChallengesResult, DomainError> {
        let bundle = self.catalog.load_report_bundle().await?;
        let matcher = ChallengeMatcher::new(&bundle.challenge);
        let key = ChallengeKey::from(query);

        Ok(MatchChallengesResult {
            challenges: matcher.matches(&key).to_vec(),
            strategies: matcher
                .strategies(&key)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}
