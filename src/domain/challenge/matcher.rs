//! ChallengeMatcher - challenges and strategies for a like/talent pairing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::{Challenge, Portrait};
use crate::domain::foundation::ElementId;

/// The 4-part key shared by portraits and challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeKey {
    pub like_id: ElementId,
    pub talent_id: ElementId,
    pub like_obvious: bool,
    pub talent_obvious: bool,
}

impl ChallengeKey {
    pub fn new(
        like_id: ElementId,
        talent_id: ElementId,
        like_obvious: bool,
        talent_obvious: bool,
    ) -> Self {
        Self {
            like_id,
            talent_id,
            like_obvious,
            talent_obvious,
        }
    }
}

impl From<&Portrait> for ChallengeKey {
    fn from(p: &Portrait) -> Self {
        Self::new(p.like_id, p.talent_id, p.like_obvious, p.talent_obvious)
    }
}

impl From<&Challenge> for ChallengeKey {
    fn from(c: &Challenge) -> Self {
        Self::new(c.like_id, c.talent_id, c.like_obvious, c.talent_obvious)
    }
}

/// Index of challenges by exact key.
///
/// Several challenges may share a key; they keep their catalog order.
#[derive(Debug, Clone, Default)]
pub struct ChallengeMatcher {
    by_key: HashMap<ChallengeKey, Vec<Challenge>>,
}

impl ChallengeMatcher {
    pub fn new(challenges: &[Challenge]) -> Self {
        let mut by_key: HashMap<ChallengeKey, Vec<Challenge>> = HashMap::new();
        for challenge in challenges {
            by_key
                .entry(ChallengeKey::from(challenge))
                .or_default()
                .push(challenge.clone());
        }
        Self { by_key }
    }

    /// Challenges whose key equals `key` on all four parts.
    pub fn matches(&self, key: &ChallengeKey) -> &[Challenge] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Challenges related to a portrait row.
    pub fn for_portrait(&self, portrait: &Portrait) -> &[Challenge] {
        self.matches(&ChallengeKey::from(portrait))
    }

    /// Non-empty strategy texts of the matching challenges.
    pub fn strategies(&self, key: &ChallengeKey) -> Vec<&str> {
        self.matches(key)
            .iter()
            .map(|c| c.strategy.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}
