//! Annotated-answer rendering.
//!
//! Turns a Q&A answer and its link map into display segments: plain text with line breaks kept
//! and resolved references as links. Rendering never fails. A missing link map, an unresolvable
//! reference or an uncompilable pattern all degrade to plain text.

use crate::config::CoreConfig;
use crate::constants::DEFAULT_PATTERN_SIZE_LIMIT;
use crate::scanner::ReferenceScanner;
use crate::segment::{assemble, Segment};
use crate::LinkMap;
use hil_records::QaRecord;

/// Service rendering annotated answers into segments.
#[derive(Debug, Clone)]
pub struct AnswerRenderer {
    pattern_size_limit: usize,
}

impl AnswerRenderer {
    /// Creates a renderer with the default pattern size limit.
    pub fn new() -> Self {
        Self {
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    /// Creates a renderer using the limits in `config`.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            pattern_size_limit: config.pattern_size_limit(),
        }
    }

    /// Renders `answer` against `links`.
    ///
    /// - An empty answer renders to no segments.
    /// - Without a link map, or with one declaring no keywords, the answer renders as a single
    ///   text segment.
    /// - Otherwise bracketed known keywords become link segments resolved to the first declared
    ///   category containing them, and everything else stays text.
    ///
    /// Joining the segments back with [`crate::segment::reconstruct`] yields `answer` exactly.
    pub fn render(&self, answer: &str, links: Option<&LinkMap>) -> Vec<Segment> {
        if answer.is_empty() {
            return Vec::new();
        }

        let links = match links {
            Some(links) if !links.has_no_keywords() => links,
            _ => return vec![Segment::text(answer)],
        };

        let scanner = ReferenceScanner::new(links.all_keywords(), self.pattern_size_limit);
        let slices = scanner.scan(answer);
        assemble(&slices, links)
    }

    /// Renders the answer of a Q&A record, normalising its `related_links` first.
    pub fn render_record(&self, record: &QaRecord) -> Vec<Segment> {
        let links = record
            .related_links
            .as_ref()
            .map(LinkMap::from_related_links);
        self.render(&record.answer, links.as_ref())
    }
}

impl Default for AnswerRenderer {
    fn default() -> Self {
        Self::new()
    }
}
