//! Rendered answer segments and their assembly from scanned slices.

use crate::resolver::resolve;
use crate::scanner::Slice;
use crate::{Category, LinkMap};
use hil_types::Keyword;
use serde::{Deserialize, Serialize};

/// One unit of rendered output.
///
/// Serialises as `{"kind": "text", "lines": [...]}` or
/// `{"kind": "link", "category": "...", "keyword": "...", "label": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Plain prose. `lines` holds the text between line breaks; a run ending in a line break
    /// ends with an empty line.
    Text { lines: Vec<String> },
    /// A resolved reference. `label` is the text to display (the keyword, without brackets).
    Link {
        category: Category,
        keyword: Keyword,
        label: String,
    },
}

impl Segment {
    /// A text segment for `text`, split at `\n`.
    pub fn text(text: &str) -> Self {
        Segment::Text {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// A link segment for `keyword` under `category`.
    pub fn link(category: Category, keyword: Keyword) -> Self {
        let label = keyword.as_str().to_string();
        Segment::Link {
            category,
            keyword,
            label,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }

    /// The answer text this segment was produced from.
    pub fn literal(&self) -> String {
        match self {
            Segment::Text { lines } => lines.join("\n"),
            Segment::Link { keyword, .. } => keyword.bracketed(),
        }
    }
}

/// Rebuilds the answer text from its segments.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(Segment::literal).collect()
}

/// Turns scanned slices into segments.
///
/// Each reference resolves through `links`; one that does not resolve falls back to its literal
/// bracketed text. Consecutive text (including such fallbacks) becomes a single text segment,
/// so two text segments are never adjacent.
pub fn assemble(slices: &[Slice<'_>], links: &LinkMap) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();

    for slice in slices {
        match *slice {
            Slice::Text(text) => pending.push_str(text),
            Slice::Reference { literal, keyword } => match resolve(links, keyword) {
                Some(resolved) => {
                    flush_text(&mut pending, &mut segments);
                    segments.push(Segment::link(resolved.category, resolved.keyword.clone()));
                }
                None => {
                    tracing::warn!("reference {:?} matched no declared category", literal);
                    pending.push_str(literal);
                }
            },
        }
    }

    flush_text(&mut pending, &mut segments);
    segments
}

fn flush_text(pending: &mut String, segments: &mut Vec<Segment>) {
    if !pending.is_empty() {
        segments.push(Segment::text(pending));
        pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(word: &str) -> Keyword {
        Keyword::new(word).unwrap()
    }

    #[test]
    fn text_splits_on_line_breaks() {
        assert_eq!(
            Segment::text("第一行\n第二行"),
            Segment::Text {
                lines: vec!["第一行".into(), "第二行".into()]
            }
        );
        assert_eq!(
            Segment::text("結尾\n"),
            Segment::Text {
                lines: vec!["結尾".into(), "".into()]
            }
        );
    }

    #[test]
    fn unresolved_reference_merges_into_text() {
        let links = LinkMap::new();
        let slices = [
            Slice::Text("前"),
            Slice::Reference {
                literal: "【A】",
                keyword: "A",
            },
            Slice::Text("後"),
        ];
        assert_eq!(assemble(&slices, &links), vec![Segment::text("前【A】後")]);
    }

    #[test]
    fn resolved_reference_becomes_link() {
        let mut links = LinkMap::new();
        links.declare(Category::Nutrient, [keyword("鎂")]);
        let slices = [
            Slice::Reference {
                literal: "【鎂】",
                keyword: "鎂",
            },
            Slice::Text("\n"),
        ];
        assert_eq!(
            assemble(&slices, &links),
            vec![
                Segment::link(Category::Nutrient, keyword("鎂")),
                Segment::Text {
                    lines: vec!["".into(), "".into()]
                },
            ]
        );
    }

    #[test]
    fn serializes_wire_shape() {
        let link = Segment::link(Category::NaturalPrescription, keyword("規律散步"));
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "link",
                "category": "naturalPrescription",
                "keyword": "規律散步",
                "label": "規律散步"
            })
        );

        let text = serde_json::to_value(Segment::text("a\nb")).unwrap();
        assert_eq!(text, serde_json::json!({"kind": "text", "lines": ["a", "b"]}));
    }

    #[test]
    fn reconstruct_restores_brackets_and_breaks() {
        let segments = vec![
            Segment::text("請補充"),
            Segment::link(Category::Nutrient, keyword("維生素C")),
            Segment::text("\n每天"),
        ];
        assert_eq!(reconstruct(&segments), "請補充【維生素C】\n每天");
    }
}
