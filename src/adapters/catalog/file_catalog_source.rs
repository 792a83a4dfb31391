//! File-based Catalog Source Adapter
//!
//! Reads the static catalog from a directory laid out as:
//!
//! ```text
//! <base>/questions.json
//! <base>/report.json
//! <base>/majors/<code>.json
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::{MajorDetail, Question, QuestionCatalog, ReportBundle};
use crate::domain::foundation::MajorCode;
use crate::ports::{CatalogError, CatalogSource};

const QUESTIONS_FILE: &str = "questions.json";
const REPORT_FILE: &str = "report.json";
const MAJORS_DIR: &str = "majors";

/// Catalog source backed by static JSON files
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    base_path: PathBuf,
}

impl FileCatalogSource {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn major_resource(code: &MajorCode) -> Result<String, CatalogError> {
        let valid = code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CatalogError::Malformed {
                resource: format!("{}/{}", MAJORS_DIR, code),
                reason: "major code contains unsupported characters".to_string(),
            });
        }
        Ok(format!("{}/{}.json", MAJORS_DIR, code))
    }

    async fn read_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, CatalogError> {
        let path = self.base_path.join(resource);
        let raw = fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CatalogError::NotFound(resource.to_string())
            } else {
                CatalogError::Io {
                    resource: resource.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        tracing::debug!(resource, bytes = raw.len(), "Loaded catalog resource");

        serde_json::from_str(&raw).map_err(|e| CatalogError::Malformed {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError> {
        let questions: Vec<Question> = self.read_json(QUESTIONS_FILE).await?;
        QuestionCatalog::new(questions).map_err(|e| CatalogError::Malformed {
            resource: QUESTIONS_FILE.to_string(),
            reason: e.to_string(),
        })
    }

    async fn load_report_bundle(&self) -> Result<ReportBundle, CatalogError> {
        let bundle: ReportBundle = self.read_json(REPORT_FILE).await?;
        bundle.validate().map_err(|e| CatalogError::Malformed {
            resource: REPORT_FILE.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bundle)
    }

    async fn load_major_detail(&self, code: &MajorCode) -> Result<MajorDetail, CatalogError> {
        let resource = Self::major_resource(code)?;
        let detail: MajorDetail = self.read_json(&resource).await?;
        detail.validate().map_err(|e| CatalogError::Malformed {
            resource: resource.clone(),
            reason: e.to_string(),
        })?;
        Ok(detail)
    }
}
