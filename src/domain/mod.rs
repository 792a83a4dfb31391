//! Domain layer containing the assessment's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, errors, percentages, dimension order)
//! - `catalog` - Static question, report and major payloads with ingest validation
//! - `answers` - The answer sheet and its archived snapshot
//! - `progress` - Completion tracking, canonical ordering and milestones
//! - `classification` - Like/talent element obviousness
//! - `portrait` - Four-quadrant portrait classification
//! - `challenge` - Challenge and strategy lookup by portrait key
//! - `affinity` - Major affinity display and the quick quiz score

pub mod affinity;
pub mod answers;
pub mod catalog;
pub mod challenge;
pub mod classification;
pub mod foundation;
pub mod portrait;
pub mod progress;
