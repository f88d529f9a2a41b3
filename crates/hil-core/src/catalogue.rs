//! Key-based record lookups over a catalogue document.

use crate::config::CoreConfig;
use crate::{Category, LookupError, LookupResult};
use hil_records::{
    CatalogueDocument, NaturalPrescriptionDetail, RecordsError, ScenarioRecord,
};
use std::collections::BTreeMap;

/// Read-only view of the data service's records.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    document: CatalogueDocument,
}

impl Catalogue {
    pub fn new(document: CatalogueDocument) -> Self {
        Self { document }
    }

    /// Loads the catalogue file named by `config`. The format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::FileRead` if the file cannot be read and `LookupError::Records` if
    /// it does not parse as a catalogue document.
    pub fn load(config: &CoreConfig) -> LookupResult<Self> {
        let path = config.data_file();
        tracing::debug!("loading catalogue from {}", path.display());

        let document = hil_records::read_document::<CatalogueDocument>(path, "Catalogue")
            .map_err(|e| match e {
                RecordsError::Io(io) => LookupError::FileRead(io),
                other => LookupError::Records(other),
            })?;

        Ok(Self::new(document))
    }

    /// Looks up a scenario by id.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::ScenarioNotFound` for an unknown id.
    pub fn scenario(&self, id: &str) -> LookupResult<&ScenarioRecord> {
        self.document
            .scenarios
            .get(id)
            .ok_or_else(|| LookupError::ScenarioNotFound(id.to_string()))
    }

    /// All scenarios, ordered by id.
    pub fn scenarios(&self) -> impl Iterator<Item = (&str, &ScenarioRecord)> {
        self.document
            .scenarios
            .iter()
            .map(|(id, scenario)| (id.as_str(), scenario))
    }

    /// Looks up an entity record by category and name.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::EntityNotFound` if the category has no record with that name.
    pub fn entity(&self, category: Category, name: &str) -> LookupResult<&serde_json::Value> {
        self.collection(category)
            .get(name)
            .ok_or_else(|| LookupError::EntityNotFound {
                category,
                name: name.to_string(),
            })
    }

    /// Names of all records in `category`, sorted.
    pub fn entity_names(&self, category: Category) -> Vec<&str> {
        self.collection(category).keys().map(String::as_str).collect()
    }

    /// Typed detail for a natural prescription, if the catalogue has a readable record.
    ///
    /// A record with malformed fields is treated as missing and logged.
    pub fn natural_prescription(&self, name: &str) -> Option<NaturalPrescriptionDetail> {
        let record = self.document.natural_prescriptions.get(name)?;
        match NaturalPrescriptionDetail::from_record(record) {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::warn!("ignoring natural prescription {:?}: {}", name, e);
                None
            }
        }
    }

    fn collection(&self, category: Category) -> &BTreeMap<String, serde_json::Value> {
        match category {
            Category::Drug => &self.document.drugs,
            Category::Symptom => &self.document.symptoms,
            Category::Nutrient => &self.document.nutrients,
            Category::NaturalPrescription => &self.document.natural_prescriptions,
            Category::LifestyleImpact => &self.document.lifestyle_impacts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PATTERN_SIZE_LIMIT;
    use std::io::Write;

    const CATALOGUE_JSON: &str = r#"{
        "scenarios": {
            "night-shift": {"name": "熬夜加班", "qa_list": []},
            "exam": {"name": "考試週", "qa_list": []}
        },
        "nutrients": {"維生素C": {"summary": "抗氧化"}},
        "naturalPrescriptions": {
            "規律散步": {"icon": "🚶", "importance": "促進循環"},
            "壞資料": {"importance": 42}
        },
        "lifestyleImpacts": {"熬夜": {"summary": "影響免疫"}}
    }"#;

    fn catalogue() -> Catalogue {
        let document = CatalogueDocument::parse(CATALOGUE_JSON, hil_records::Format::Json)
            .expect("parse catalogue");
        Catalogue::new(document)
    }

    #[test]
    fn looks_up_entities_by_category_and_name() {
        let catalogue = catalogue();
        let record = catalogue.entity(Category::Nutrient, "維生素C").unwrap();
        assert_eq!(record["summary"], "抗氧化");
        assert!(catalogue.entity(Category::LifestyleImpact, "熬夜").is_ok());
    }

    #[test]
    fn missing_entity_is_an_error() {
        let err = catalogue()
            .entity(Category::Drug, "維生素C")
            .expect_err("drugs collection is empty");
        assert!(matches!(
            err,
            LookupError::EntityNotFound { category: Category::Drug, ref name } if name == "維生素C"
        ));
    }

    #[test]
    fn scenarios_are_ordered_by_id() {
        let catalogue = catalogue();
        let ids: Vec<&str> = catalogue.scenarios().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["exam", "night-shift"]);
        assert_eq!(catalogue.scenario("exam").unwrap().name.as_str(), "考試週");
        assert!(matches!(
            catalogue.scenario("missing"),
            Err(LookupError::ScenarioNotFound(_))
        ));
    }

    #[test]
    fn malformed_prescription_detail_is_missing() {
        let catalogue = catalogue();
        assert!(catalogue.natural_prescription("規律散步").is_some());
        assert!(catalogue.natural_prescription("壞資料").is_none());
        assert!(catalogue.natural_prescription("不存在").is_none());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(CATALOGUE_JSON.as_bytes()).unwrap();

        let config =
            CoreConfig::new(file.path().to_path_buf(), DEFAULT_PATTERN_SIZE_LIMIT).unwrap();
        let catalogue = Catalogue::load(&config).expect("load catalogue");
        assert_eq!(
            catalogue.entity_names(Category::NaturalPrescription),
            vec!["壞資料", "規律散步"]
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            CoreConfig::new(dir.path().join("absent.json"), DEFAULT_PATTERN_SIZE_LIMIT).unwrap();
        assert!(matches!(
            Catalogue::load(&config),
            Err(LookupError::FileRead(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_records_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        file.write_all(b"scenarios: [1, 2]\n").unwrap();

        let config =
            CoreConfig::new(file.path().to_path_buf(), DEFAULT_PATTERN_SIZE_LIMIT).unwrap();
        assert!(matches!(
            Catalogue::load(&config),
            Err(LookupError::Records(_))
        ));
    }
}
