//! Reference scanning: split an answer into plain text and candidate references.
//!
//! A candidate reference is the exact literal `【keyword】` where `keyword` is one of the known
//! keywords. Bracketed text naming anything else, unbalanced brackets and nested brackets are
//! plain text. Keywords are spliced into the pattern escaped, so characters such as `+`, `(` or
//! `.` in a keyword are matched literally.

use hil_types::{Keyword, REFERENCE_CLOSE, REFERENCE_OPEN};
use regex::{Regex, RegexBuilder};

/// One slice of a scanned answer, borrowed from the answer text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slice<'a> {
    /// Plain text, possibly containing line breaks and unmatched brackets.
    Text(&'a str),
    /// A bracketed known keyword. `literal` includes the brackets, `keyword` does not.
    Reference { literal: &'a str, keyword: &'a str },
}

impl<'a> Slice<'a> {
    /// The answer text covered by this slice.
    pub fn literal(&self) -> &'a str {
        match self {
            Slice::Text(text) => text,
            Slice::Reference { literal, .. } => literal,
        }
    }
}

/// Compiled matcher for the bracketed references of one set of keywords.
#[derive(Clone, Debug)]
pub struct ReferenceScanner {
    pattern: Option<Regex>,
}

impl ReferenceScanner {
    /// Builds a scanner for `keywords`.
    ///
    /// With no keywords no pattern is compiled and every answer scans as a single text slice.
    /// If the pattern cannot be compiled within `size_limit` bytes the scanner degrades the
    /// same way and logs a warning.
    pub fn new<'k>(keywords: impl IntoIterator<Item = &'k Keyword>, size_limit: usize) -> Self {
        let mut literals: Vec<&str> = keywords.into_iter().map(Keyword::as_str).collect();
        if literals.is_empty() {
            return Self { pattern: None };
        }

        // Longest first, then lexical, so the alternation is deterministic.
        literals.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();

        let alternation = literals
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(
            "{}(?:{}){}",
            regex::escape(&REFERENCE_OPEN.to_string()),
            alternation,
            regex::escape(&REFERENCE_CLOSE.to_string())
        );

        match RegexBuilder::new(&source).size_limit(size_limit).build() {
            Ok(pattern) => {
                tracing::debug!("compiled reference pattern for {} keywords", literals.len());
                Self {
                    pattern: Some(pattern),
                }
            }
            Err(e) => {
                tracing::warn!(
                    "reference pattern for {} keywords failed to compile, rendering answers unlinked: {}",
                    literals.len(),
                    e
                );
                Self { pattern: None }
            }
        }
    }

    /// True if this scanner can produce reference slices.
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Splits `answer` into slices in document order.
    ///
    /// Empty text between adjacent references, or at either end, is not emitted; an empty
    /// answer yields no slices.
    pub fn scan<'a>(&self, answer: &'a str) -> Vec<Slice<'a>> {
        if answer.is_empty() {
            return Vec::new();
        }

        let Some(pattern) = &self.pattern else {
            return vec![Slice::Text(answer)];
        };

        let mut slices = Vec::new();
        let mut cursor = 0;

        for found in pattern.find_iter(answer) {
            if found.start() > cursor {
                slices.push(Slice::Text(&answer[cursor..found.start()]));
            }

            let literal = found.as_str();
            let keyword = &literal
                [REFERENCE_OPEN.len_utf8()..literal.len() - REFERENCE_CLOSE.len_utf8()];
            slices.push(Slice::Reference { literal, keyword });
            cursor = found.end();
        }

        if cursor < answer.len() {
            slices.push(Slice::Text(&answer[cursor..]));
        }

        slices
    }
}
