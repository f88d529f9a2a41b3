//! Catalogue document wire model.
//!
//! The data service exposes every record through key-based lookups. Offline, the same data is a
//! single document keyed first by collection and then by entity name:
//!
//! ```json
//! {
//!   "scenarios": { "night-shift": { "name": "熬夜加班", "qa_list": [] } },
//!   "nutrients": { "維生素C": { "...": "..." } },
//!   "naturalPrescriptions": { "規律散步": { "icon": "🚶", "importance": "..." } }
//! }
//! ```
//!
//! Entity records other than scenarios are free-form; only natural prescription details have a
//! typed view because the prescription summary reads specific fields from them.

use crate::{parse_document, Format, RecordsResult, ScenarioRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form entity records keyed by entity name.
pub type EntityRecords = BTreeMap<String, serde_json::Value>;

/// The whole catalogue as served by the data service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueDocument {
    #[serde(default)]
    pub scenarios: BTreeMap<String, ScenarioRecord>,

    #[serde(default)]
    pub drugs: EntityRecords,

    #[serde(default)]
    pub symptoms: EntityRecords,

    #[serde(default)]
    pub nutrients: EntityRecords,

    #[serde(default)]
    pub natural_prescriptions: EntityRecords,

    #[serde(default)]
    pub lifestyle_impacts: EntityRecords,
}

impl CatalogueDocument {
    /// Parse a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns a translation error naming the failing field if the text does not match.
    pub fn parse(text: &str, format: Format) -> RecordsResult<Self> {
        parse_document(text, format, "Catalogue")
    }
}

/// Typed view of a natural prescription record. Fields not listed here are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalPrescriptionDetail {
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub importance: Option<String>,

    #[serde(default)]
    pub prescription: Option<PrescriptionPlan>,

    #[serde(default)]
    pub timing_and_precautions: Option<TimingAndPrecautions>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPlan {
    #[serde(default)]
    pub how_long: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingAndPrecautions {
    #[serde(default)]
    pub reminders: Option<String>,
}

impl NaturalPrescriptionDetail {
    /// Read the typed view out of a free-form entity record.
    ///
    /// # Errors
    ///
    /// Returns a translation error if a known field has an unexpected type.
    pub fn from_record(record: &serde_json::Value) -> RecordsResult<Self> {
        serde_path_to_error::deserialize(record)
            .map_err(|err| {
                crate::RecordsError::Translation(format!(
                    "Natural prescription schema mismatch at {}: {}",
                    err.path(),
                    err.inner()
                ))
            })
    }
}
