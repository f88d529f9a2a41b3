//! Canonical entity categories.
//!
//! Data records name categories inconsistently: `nutrients` in a Q&A record's `related_links`,
//! `nutrient` in detail routes, `naturalPrescriptions` in the catalogue and sometimes
//! `natural_prescriptions` or a short form like `prescription`. All of these are normalised
//! here, once, at the boundary. Everything past the boundary works with [`Category`].

use crate::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};

/// One of the entity kinds a detail record and its keyword are filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Drug,
    Symptom,
    Nutrient,
    NaturalPrescription,
    LifestyleImpact,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Drug,
        Category::Symptom,
        Category::Nutrient,
        Category::NaturalPrescription,
        Category::LifestyleImpact,
    ];

    /// Normalises a category name as found on the wire.
    ///
    /// Matching ignores case and `_`/`-`/space separators, and accepts singular, plural and
    /// short forms. Returns `None` for names that do not denote a known category.
    pub fn normalize(raw: &str) -> Option<Self> {
        let folded: String = raw
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match folded.as_str() {
            "drug" | "drugs" | "medicine" | "medicines" => Some(Self::Drug),
            "symptom" | "symptoms" => Some(Self::Symptom),
            "nutrient" | "nutrients" => Some(Self::Nutrient),
            "naturalprescription" | "naturalprescriptions" | "prescription" | "prescriptions" => {
                Some(Self::NaturalPrescription)
            }
            "lifestyleimpact" | "lifestyleimpacts" | "lifestyle" | "impact" | "impacts" => {
                Some(Self::LifestyleImpact)
            }
            _ => None,
        }
    }

    /// Parses a category name supplied by a user.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownCategory`] if the name does not normalise to a category.
    pub fn parse(raw: &str) -> LookupResult<Self> {
        Self::normalize(raw).ok_or_else(|| LookupError::UnknownCategory(raw.to_string()))
    }

    /// Canonical name, as used in detail routes (`/results/<name>/<keyword>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drug => "drug",
            Self::Symptom => "symptom",
            Self::Nutrient => "nutrient",
            Self::NaturalPrescription => "naturalPrescription",
            Self::LifestyleImpact => "lifestyleImpact",
        }
    }

    /// Key of this category's collection in the catalogue document.
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Drug => "drugs",
            Self::Symptom => "symptoms",
            Self::Nutrient => "nutrients",
            Self::NaturalPrescription => "naturalPrescriptions",
            Self::LifestyleImpact => "lifestyleImpacts",
        }
    }

    /// Tag colour for related-reference tags. Only nutrients and natural prescriptions are
    /// tagged under an answer.
    pub fn tag_colour(&self) -> Option<&'static str> {
        match self {
            Self::Nutrient => Some("blue"),
            Self::NaturalPrescription => Some("green"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
