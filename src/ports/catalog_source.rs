//! Catalog Source Port - read-only access to the static assessment data.

use async_trait::async_trait;

use crate::domain::catalog::{MajorDetail, QuestionCatalog, ReportBundle};
use crate::domain::foundation::{DomainError, MajorCode};

/// Errors raised while loading catalog data
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog resource not found: {0}")]
    NotFound(String),

    #[error("Malformed catalog resource {resource}: {reason}")]
    Malformed { resource: String, reason: String },

    #[error("IO error reading {resource}: {reason}")]
    Io { resource: String, reason: String },
}

impl CatalogError {
    pub fn resource(&self) -> &str {
        match self {
            CatalogError::NotFound(resource) => resource,
            CatalogError::Malformed { resource, .. } => resource,
            CatalogError::Io { resource, .. } => resource,
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let resource = err.resource().to_string();
        DomainError::missing_catalog(resource, err.to_string())
    }
}

/// Port for loading the static catalog.
///
/// Implementations validate what they load; callers receive only
/// well-formed domain values.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The full questionnaire.
    async fn load_questions(&self) -> Result<QuestionCatalog, CatalogError>;

    /// Portrait, challenge, element and mechanism rows.
    async fn load_report_bundle(&self) -> Result<ReportBundle, CatalogError>;

    /// Precomputed detail for one major.
    async fn load_major_detail(&self, code: &MajorCode) -> Result<MajorDetail, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn catalog_errors_become_missing_catalog_data() {
        let err: DomainError = CatalogError::Malformed {
            resource: "questions.json".into(),
            reason: "expected array".into(),
        }
        .into();

        assert_eq!(err.code, ErrorCode::MissingCatalogData);
        assert_eq!(
            err.details.get("resource").map(String::as_str),
            Some("questions.json")
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = CatalogError::NotFound("majors/080901.json".into());
        assert!(err.to_string().contains("majors/080901.json"));
        assert_eq!(err.resource(), "majors/080901.json");
    }
}
