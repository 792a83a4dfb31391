//! Property-based tests for the scoring, classification and progress rules.

mod common;

use proptest::prelude::*;
use std::collections::HashSet;

use talent_compass::domain::affinity::AffinityScorer;
use talent_compass::domain::answers::AnswerSheet;
use talent_compass::domain::catalog::QuestionCatalog;
use talent_compass::domain::foundation::{DimensionOrder, QuestionId};
use talent_compass::domain::portrait::{PortraitClassifier, Quadrant};
use talent_compass::domain::progress::{MilestoneRules, ProgressTracker};

const TOTAL: usize = 168;

fn sheet(values: &[i32]) -> AnswerSheet {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (QuestionId::new(i as u32 + 1), *v))
        .collect()
}

fn energy(values: &[i32]) -> f64 {
    AffinityScorer::new(values.len())
        .score(&sheet(values))
        .unwrap()
        .energy
}

// =============================================================================
// Affinity score anchors
// =============================================================================

#[test]
fn score_anchors() {
    assert_eq!(energy(&[2; 8]), 1.0);
    assert_eq!(energy(&[-2; 8]), 0.0);
    assert_eq!(energy(&[0; 8]), 0.5);
    assert_eq!(energy(&[2, 2, -2, -2]), 0.5);
}

proptest! {
    #[test]
    fn score_stays_in_unit_interval(values in prop::collection::vec(-10i32..=10, 1..40)) {
        let e = energy(&values);
        prop_assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn score_in_range_values_is_linear(values in prop::collection::vec(-2i32..=2, 1..40)) {
        let average = values.iter().sum::<i32>() as f64 / values.len() as f64;
        let expected = (average + 2.0) / 4.0;
        prop_assert!((energy(&values) - expected).abs() < 1e-9);
    }
}

// =============================================================================
// Portrait quadrants
// =============================================================================

#[test]
fn every_flag_pair_maps_to_a_distinct_quadrant() {
    let quadrants: HashSet<Quadrant> = [(true, true), (true, false), (false, true), (false, false)]
        .into_iter()
        .map(|(like, talent)| PortraitClassifier::classify(like, talent))
        .collect();

    assert_eq!(quadrants.len(), 4);
    for quadrant in Quadrant::all() {
        assert!(quadrants.contains(quadrant));
        let (like, talent) = quadrant.flags();
        assert_eq!(PortraitClassifier::classify(like, talent), *quadrant);
    }
}

// =============================================================================
// Progress and milestones
// =============================================================================

proptest! {
    #[test]
    fn dimension_progress_never_decreases(ids in prop::collection::vec(1u32..=168, 0..200)) {
        let catalog = QuestionCatalog::new(common::questionnaire()).unwrap();
        let order = DimensionOrder::default();
        let mut answers = AnswerSheet::new();
        let mut last: Vec<usize> = vec![0; order.len()];

        for id in ids {
            answers.set(QuestionId::new(id), 1);
            let current: Vec<usize> = ProgressTracker::new(&catalog, &answers, &order)
                .dimension_breakdown()
                .iter()
                .map(|d| d.answered)
                .collect();
            for (before, after) in last.iter().zip(&current) {
                prop_assert!(after >= before);
            }
            last = current;
        }
    }

    #[test]
    fn milestones_fire_once_however_the_count_is_split(
        steps in prop::collection::vec(0usize..=30, 0..20)
    ) {
        let rules = MilestoneRules::default();
        let order = DimensionOrder::default();

        let mut count = 0;
        let mut stepped = Vec::new();
        for step in steps {
            let next = (count + step).min(TOTAL);
            stepped.extend(rules.detect(count, next, TOTAL, &order));
            count = next;
        }

        prop_assert_eq!(stepped, rules.detect(0, count, TOTAL, &order));
    }

    #[test]
    fn setting_an_answer_twice_is_idempotent(id in 1u32..500, value in -2i32..=2) {
        let mut once = AnswerSheet::new();
        once.set(QuestionId::new(id), value);
        let mut twice = once.clone();
        twice.set(QuestionId::new(id), value);

        prop_assert_eq!(once, twice);
    }
}
