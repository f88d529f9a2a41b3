//! Scenario and Q&A wire models.
//!
//! A scenario groups the questions people ask about one situation (e.g. "熬夜加班") together with
//! annotated answers. Each answer may embed bracketed references such as `【輔酶Q10】` that are
//! declared in the record's `related_links`.

use crate::{parse_document, Format, RecordsResult, RelatedLinks};
use hil_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// One question and its annotated answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: NonEmptyText,

    #[serde(default)]
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<RelatedLinks>,
}

impl QaRecord {
    /// Parse a single Q&A record.
    ///
    /// # Errors
    ///
    /// Returns a translation error naming the failing field if the text does not match.
    pub fn parse(text: &str, format: Format) -> RecordsResult<Self> {
        parse_document(text, format, "Q&A record")
    }
}

/// A scenario as stored in the catalogue under its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub name: NonEmptyText,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub qa_list: Vec<QaRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl ScenarioRecord {
    /// Parse a scenario record.
    ///
    /// # Errors
    ///
    /// Returns a translation error naming the failing field if the text does not match.
    pub fn parse(text: &str, format: Format) -> RecordsResult<Self> {
        parse_document(text, format, "Scenario")
    }

    /// Title line as shown above the scenario, icon first when present.
    pub fn title(&self) -> String {
        match self.icon.as_deref().map(str::trim).filter(|icon| !icon.is_empty()) {
            Some(icon) => format!("{icon} {}", self.name),
            None => self.name.to_string(),
        }
    }
}
