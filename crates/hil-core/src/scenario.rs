//! Scenario rendering: every Q&A answer of a scenario with its related tags.

use crate::answer::AnswerRenderer;
use crate::catalogue::Catalogue;
use crate::related::{related_tags, RelatedTag};
use crate::segment::Segment;
use crate::{LinkMap, LookupResult};
use hil_records::{QaRecord, ScenarioRecord};
use serde::Serialize;

/// One rendered question and answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedQa {
    pub question: String,
    pub answer: Vec<Segment>,
    pub tags: Vec<RelatedTag>,
}

/// A scenario ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedScenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub items: Vec<RenderedQa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

/// Service rendering scenarios from catalogue records.
#[derive(Debug, Clone, Default)]
pub struct ScenarioService {
    renderer: AnswerRenderer,
}

impl ScenarioService {
    pub fn new(renderer: AnswerRenderer) -> Self {
        Self { renderer }
    }

    /// Renders the scenario stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::ScenarioNotFound` if the catalogue has no such scenario.
    pub fn render_by_id(&self, catalogue: &Catalogue, id: &str) -> LookupResult<RenderedScenario> {
        let record = catalogue.scenario(id)?;
        Ok(self.render(id, record))
    }

    /// Renders `record`, answers in list order.
    pub fn render(&self, id: &str, record: &ScenarioRecord) -> RenderedScenario {
        RenderedScenario {
            id: id.to_string(),
            title: record.title(),
            description: record.description.clone(),
            items: record.qa_list.iter().map(|qa| self.render_qa(qa)).collect(),
            disclaimer: record
                .disclaimer
                .clone()
                .filter(|text| !text.trim().is_empty()),
        }
    }

    fn render_qa(&self, qa: &QaRecord) -> RenderedQa {
        let links = qa.related_links.as_ref().map(LinkMap::from_related_links);
        RenderedQa {
            question: qa.question.to_string(),
            answer: self.renderer.render(&qa.answer, links.as_ref()),
            tags: links.as_ref().map(related_tags).unwrap_or_default(),
        }
    }
}
