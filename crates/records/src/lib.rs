//! Wire/boundary support for the health lookup data service.
//!
//! This crate provides **wire models** for the documents served by the data service and
//! helpers to parse them from JSON or YAML text:
//! - scenario Q&A records with their `related_links` declarations
//! - the catalogue document holding scenarios and entity records keyed by name
//! - natural prescription detail records
//!
//! Category keys are kept exactly as they appear on the wire. Normalising them to the canonical
//! category enumeration is a domain concern and happens in `hil-core`.

pub mod catalogue;
pub mod related_links;
pub mod scenario;

use serde::de::DeserializeOwned;
use std::path::Path;

pub use catalogue::{
    CatalogueDocument, EntityRecords, NaturalPrescriptionDetail, PrescriptionPlan, TimingAndPrecautions,
};
pub use related_links::RelatedLinks;
pub use scenario::{QaRecord, ScenarioRecord};

/// Errors returned by the `hil-records` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`RecordsError`].
pub type RecordsResult<T> = Result<T, RecordsError>;

/// Text formats understood by the record parsers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks a format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse `text` into a wire type, reporting the path of the failing field on mismatch.
///
/// `what` names the document in error messages, e.g. `"Scenario"`.
///
/// # Errors
///
/// Returns [`RecordsError::InvalidYaml`] if YAML text is not well formed,
/// [`RecordsError::InvalidJson`] for trailing characters after a JSON document, and
/// [`RecordsError::Translation`] if the text is not valid for `T`.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: Format,
    what: &str,
) -> RecordsResult<T> {
    let (path, source) = match format {
        Format::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(text);
            match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
                Ok(parsed) => {
                    deserializer.end()?;
                    return Ok(parsed);
                }
                Err(err) => (err.path().to_string(), err.into_inner().to_string()),
            }
        }
        Format::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(text)?;
            match serde_path_to_error::deserialize::<_, T>(value) {
                Ok(parsed) => return Ok(parsed),
                Err(err) => (err.path().to_string(), err.into_inner().to_string()),
            }
        }
    };

    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    Err(RecordsError::Translation(format!(
        "{what} schema mismatch at {path}: {source}"
    )))
}

/// Read and parse a document from disk, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] if the file cannot be read, or the errors of
/// [`parse_document`].
pub fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> RecordsResult<T> {
    let text = std::fs::read_to_string(path)?;
    parse_document(&text, Format::from_path(path), what)
}
