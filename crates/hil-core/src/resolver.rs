//! Reference resolution: which category does a bracketed keyword link to?
//!
//! The category whose declaration first named the keyword wins, counted in the order the
//! `related_links` keys were declared. A keyword legitimately declared under two categories
//! therefore always links to the first; this is a simplification, not a disambiguation.

use crate::{Category, LinkMap};
use hil_types::Keyword;

/// A keyword resolved to the category it links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'m> {
    pub category: Category,
    pub keyword: &'m Keyword,
}

/// Resolves `keyword` against `links`, first-declared category wins.
///
/// Returns `None` when no category declares the keyword.
pub fn resolve<'m>(links: &'m LinkMap, keyword: &str) -> Option<Resolved<'m>> {
    links
        .first_declared(keyword)
        .map(|(category, keyword)| Resolved { category, keyword })
}
