//! Canonical question order.
//!
//! Primary key: position of the question's dimension in the dimension order
//! (unknown dimensions last). Secondary: `like` before any other type.
//! Tertiary: numeric question id ascending.

use std::cmp::Ordering;

use crate::domain::catalog::Question;
use crate::domain::foundation::DimensionOrder;

fn kind_rank(question: &Question) -> u8 {
    if question.kind.is_like() {
        0
    } else {
        1
    }
}

/// Compares two questions in canonical order.
pub fn canonical_cmp(order: &DimensionOrder, a: &Question, b: &Question) -> Ordering {
    order
        .rank(&a.dimension)
        .cmp(&order.rank(&b.dimension))
        .then_with(|| kind_rank(a).cmp(&kind_rank(b)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Returns the questions in canonical order. Stable and deterministic.
pub fn sort_canonical<'a>(questions: &'a [Question], order: &DimensionOrder) -> Vec<&'a Question> {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by(|a, b| canonical_cmp(order, a, b));
    sorted
}
