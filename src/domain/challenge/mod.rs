//! Challenge Module - challenge/strategy lookup by exact portrait key.

mod matcher;

pub use matcher::{ChallengeKey, ChallengeMatcher};
