//! Shared fakes for handler tests.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::catalog::fixtures::question;
use crate::domain::catalog::{MajorDetail, Question, QuestionCatalog, ReportBundle};
use crate::domain::foundation::{MajorCode, DEFAULT_DIMENSIONS};
use crate::adapters::storage::InMemoryKeyValueStore;
use crate::ports::{CatalogError, CatalogSource, KeyValueStore, KeyValueStoreError};

/// Catalog source serving fixed in-memory data.
#[derive(Default)]
pub(crate) struct StaticCatalog {
    pub questions: Option<Vec<Question>>,
    pub report: Option<ReportBundle>,
    pub majors: HashMap<String, MajorDetail>,
}

impl StaticCatalog {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Some(questions),
            ..Self::default()
        }
    }

    pub fn with_report(mut self, report: ReportBundle) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_major(mut self, code: &str, detail: MajorDetail) -> Self {
        self.majors.insert(code.to_string(), detail);
        self
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError> {
        let questions = self
            .questions
            .clone()
            .ok_or_else(|| CatalogError::NotFound("questions.json".into()))?;
        QuestionCatalog::new(questions).map_err(|e| CatalogError::Malformed {
            resource: "questions.json".into(),
            reason: e.to_string(),
        })
    }

    async fn load_report_bundle(&self) -> Result<ReportBundle, CatalogError> {
        self.report
            .clone()
            .ok_or_else(|| CatalogError::NotFound("report.json".into()))
    }

    async fn load_major_detail(&self, code: &MajorCode) -> Result<MajorDetail, CatalogError> {
        self.majors
            .get(code.as_str())
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("majors/{}.json", code)))
    }
}

/// Store whose every operation fails.
pub(crate) struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Err(KeyValueStoreError::IoError("disk unavailable".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), KeyValueStoreError> {
        Err(KeyValueStoreError::IoError("disk unavailable".into()))
    }

    async fn remove(&self, _key: &str) -> Result<(), KeyValueStoreError> {
        Err(KeyValueStoreError::IoError("disk unavailable".into()))
    }

    async fn clear(&self) -> Result<(), KeyValueStoreError> {
        Err(KeyValueStoreError::IoError("disk unavailable".into()))
    }
}

/// In-memory store that refuses to remove one key.
pub(crate) struct RemoveFailingStore {
    inner: InMemoryKeyValueStore,
    failing_key: &'static str,
}

impl RemoveFailingStore {
    pub fn new(inner: InMemoryKeyValueStore, failing_key: &'static str) -> Self {
        Self { inner, failing_key }
    }
}

#[async_trait]
impl KeyValueStore for RemoveFailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        if key == self.failing_key {
            return Err(KeyValueStoreError::IoError("remove refused".into()));
        }
        self.inner.remove(key).await
    }

    async fn clear(&self) -> Result<(), KeyValueStoreError> {
        self.inner.clear().await
    }
}

/// Full questionnaire: `per_dimension` questions in each default dimension.
///
/// Ids run 1.. in canonical order, like questions first within a dimension.
pub(crate) fn full_questionnaire(per_dimension: u32) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut id = 1;
    for dimension in DEFAULT_DIMENSIONS {
        for i in 0..per_dimension {
            let kind = if i < per_dimension / 2 { "like" } else { "talent" };
            questions.push(question(id, dimension, kind));
            id += 1;
        }
    }
    questions
}
