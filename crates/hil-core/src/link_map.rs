//! Per-answer declaration of which keywords are references and under which category.

use crate::Category;
use hil_records::RelatedLinks;
use hil_types::Keyword;
use std::collections::{HashMap, HashSet};

/// Categories and their keyword sets for one answer, in declaration order.
///
/// The same keyword may be declared under several categories; within one category each keyword
/// is kept once. A shared keyword resolves to the category of its first declaration, counted in
/// the order declarations were made, even when a later declaration names a category already
/// seen under another key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkMap {
    entries: Vec<(Category, Vec<Keyword>)>,
    declared: HashSet<(Category, Keyword)>,
    owners: HashMap<Keyword, Category>,
    union: Vec<Keyword>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a link map from a record's `related_links`.
    ///
    /// Category keys are normalised with [`Category::normalize`]. Keys naming no known category,
    /// and keywords that are empty or contain reference brackets, are dropped with a warning:
    /// they can never be rendered as links, so the affected text stays plain.
    pub fn from_related_links(links: &RelatedLinks) -> Self {
        let mut map = Self::new();

        for (key, keywords) in links.iter() {
            let Some(category) = Category::normalize(key) else {
                tracing::warn!("dropping related links under unknown category {:?}", key);
                continue;
            };

            let valid = keywords.iter().filter_map(|raw| match Keyword::new(raw.as_str()) {
                Ok(keyword) => Some(keyword),
                Err(e) => {
                    tracing::warn!("dropping {} keyword {:?}: {}", category, raw, e);
                    None
                }
            });
            map.declare(category, valid);
        }

        map
    }

    /// Declares `keywords` under `category`.
    ///
    /// A category declared again keeps its original position in [`LinkMap::categories`]; new
    /// keywords are appended and duplicates ignored. Keywords not declared before are owned by
    /// `category` for resolution.
    pub fn declare(&mut self, category: Category, keywords: impl IntoIterator<Item = Keyword>) {
        let index = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(index) => index,
            None => {
                self.entries.push((category, Vec::new()));
                self.entries.len() - 1
            }
        };

        for keyword in keywords {
            if !self.declared.insert((category, keyword.clone())) {
                continue;
            }
            if !self.owners.contains_key(&keyword) {
                self.owners.insert(keyword.clone(), category);
                self.union.push(keyword.clone());
            }
            self.entries[index].1.push(keyword);
        }
    }

    /// Iterates categories and their keywords, each category at its first declaration.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Keyword])> {
        self.entries
            .iter()
            .map(|(category, keywords)| (*category, keywords.as_slice()))
    }

    /// Keywords declared under `category`, in declaration order.
    pub fn keywords_for(&self, category: Category) -> &[Keyword] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, keywords)| keywords.as_slice())
            .unwrap_or(&[])
    }

    /// The category that first declared `keyword`, with the stored keyword.
    pub fn first_declared(&self, keyword: &str) -> Option<(Category, &Keyword)> {
        self.owners
            .get_key_value(keyword)
            .map(|(keyword, category)| (*category, keyword))
    }

    /// Union of all declared keywords, each once, in first-declared order.
    pub fn all_keywords(&self) -> &[Keyword] {
        &self.union
    }

    /// True when no keyword is declared under any category.
    pub fn has_no_keywords(&self) -> bool {
        self.union.is_empty()
    }
}
