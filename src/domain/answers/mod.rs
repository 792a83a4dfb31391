//! Answers Module - the user's current and archived answer sets.

mod sheet;

pub use sheet::{AnswerSheet, ArchivedAnswers};
