//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Talent Compass domain.

mod dimension;
mod errors;
mod ids;
mod percentage;
mod timestamp;
mod trait_kind;

pub use dimension::{DimensionOrder, DEFAULT_DIMENSIONS};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ElementId, MajorCode, QuestionId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
pub use trait_kind::TraitKind;
