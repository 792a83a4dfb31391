//! Stored quick-quiz results, one per major.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, ErrorCode, MajorCode, Timestamp, ValidationError};

use super::scorer::QuizScore;

/// Last quiz outcome for a major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub energy: f64,
    pub answered: usize,
    pub assessed_at: Timestamp,
}

impl QuizResult {
    pub fn from_score(score: &QuizScore) -> Self {
        Self {
            energy: score.energy,
            answered: score.answered,
            assessed_at: Timestamp::now(),
        }
    }
}

/// A stored result paired with its major, for ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub major_code: MajorCode,
    #[serde(flatten)]
    pub result: QuizResult,
}

/// Quiz results keyed by major code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuizResultBook {
    results: BTreeMap<MajorCode, QuizResult>,
}

impl QuizResultBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a result; a re-assessment replaces the earlier one.
    pub fn record(&mut self, code: MajorCode, result: QuizResult) -> Option<QuizResult> {
        self.results.insert(code, result)
    }

    pub fn get(&self, code: &MajorCode) -> Option<&QuizResult> {
        self.results.get(code)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results by energy, highest first; equal energies fall back to code order.
    pub fn ranked(&self) -> Vec<RankedResult> {
        let mut ranked: Vec<RankedResult> = self
            .results
            .iter()
            .map(|(code, result)| RankedResult {
                major_code: code.clone(),
                result: result.clone(),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.result
                .energy
                .partial_cmp(&a.result.energy)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.major_code.cmp(&b.major_code))
        });
        ranked
    }

    /// Encodes the persisted form.
    ///
    /// A non-finite energy would be written as `null` and make the whole book
    /// unreadable, so it is refused along with any serializer failure.
    pub fn to_json(&self) -> Result<String, DomainError> {
        if let Some((code, _)) = self.results.iter().find(|(_, r)| !r.energy.is_finite()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Quiz result energy for {} is not finite", code),
            )
            .with_detail("major_code", code.to_string()));
        }
        serde_json::to_string(self).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode quiz results: {}", e),
            )
        })
    }

    /// Parses the persisted form, rejecting blank codes and non-finite energies.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw_map: BTreeMap<String, QuizResult> = serde_json::from_str(raw)
            .map_err(|e| ValidationError::invalid_format("major_quiz_results", e.to_string()))?;

        let mut results = BTreeMap::new();
        for (code, result) in raw_map {
            if !result.energy.is_finite() {
                return Err(ValidationError::invalid_format(
                    "major_quiz_results",
                    format!("energy for {} is not finite", code),
                ));
            }
            results.insert(MajorCode::new(code)?, result);
        }
        Ok(Self { results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> MajorCode {
        MajorCode::new(s).unwrap()
    }

    fn result(energy: f64) -> QuizResult {
        QuizResult {
            energy,
            answered: 8,
            assessed_at: Timestamp::now(),
        }
    }

    #[test]
    fn record_overwrites_previous_result() {
        let mut book = QuizResultBook::new();
        assert!(book.record(code("080901"), result(0.2)).is_none());
        let previous = book.record(code("080901"), result(0.8));

        assert_eq!(previous.map(|r| r.energy), Some(0.2));
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(&code("080901")).map(|r| r.energy), Some(0.8));
    }

    #[test]
    fn ranked_orders_by_energy_then_code() {
        let mut book = QuizResultBook::new();
        book.record(code("300"), result(0.5));
        book.record(code("100"), result(0.9));
        book.record(code("200"), result(0.5));

        let order: Vec<_> = book
            .ranked()
            .into_iter()
            .map(|r| r.major_code.as_str().to_string())
            .collect();
        assert_eq!(order, vec!["100", "200", "300"]);
    }

    #[test]
    fn json_survives_parse() {
        let mut book = QuizResultBook::new();
        book.record(code("080901"), result(0.75));

        let parsed = QuizResultBook::parse(&book.to_json().unwrap()).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(QuizResultBook::parse("not json").is_err());
        assert!(QuizResultBook::parse("[1, 2]").is_err());
    }

    #[test]
    fn parse_rejects_blank_major_code() {
        let raw = r#"{"": {"energy": 0.5, "answered": 8, "assessedAt": "2026-01-01T00:00:00Z"}}"#;
        assert!(QuizResultBook::parse(raw).is_err());
    }

    #[test]
    fn to_json_refuses_non_finite_energy() {
        let mut book = QuizResultBook::new();
        book.record(code("080901"), result(f64::NAN));

        let err = book.to_json().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.details.get("major_code"), Some(&"080901".to_string()));
    }
}
