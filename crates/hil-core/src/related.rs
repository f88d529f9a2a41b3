//! Related-reference tags shown under an answer.

use crate::{Category, LinkMap};
use hil_types::Keyword;
use serde::Serialize;

/// Categories tagged under an answer, in tag order.
const TAGGED_CATEGORIES: [Category; 2] = [Category::Nutrient, Category::NaturalPrescription];

/// A tag linking to one declared keyword's detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelatedTag {
    pub category: Category,
    pub keyword: Keyword,
    pub colour: &'static str,
}

/// One tag per keyword declared under a tagged category, nutrients first.
///
/// Tags follow the fixed category order regardless of how the link map declares them.
pub fn related_tags(links: &LinkMap) -> Vec<RelatedTag> {
    TAGGED_CATEGORIES
        .iter()
        .filter_map(|category| category.tag_colour().map(|colour| (*category, colour)))
        .flat_map(move |(category, colour)| {
            links
                .keywords_for(category)
                .iter()
                .map(move |keyword| RelatedTag {
                    category,
                    keyword: keyword.clone(),
                    colour,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<Keyword> {
        words.iter().map(|w| Keyword::new(*w).unwrap()).collect()
    }

    #[test]
    fn nutrients_come_before_prescriptions() {
        let mut links = LinkMap::new();
        links.declare(Category::NaturalPrescription, keywords(&["規律散步"]));
        links.declare(Category::Nutrient, keywords(&["鎂", "維生素C"]));

        let tags = related_tags(&links);
        let summary: Vec<(Category, &str, &str)> = tags
            .iter()
            .map(|t| (t.category, t.colour, t.keyword.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Category::Nutrient, "blue", "鎂"),
                (Category::Nutrient, "blue", "維生素C"),
                (Category::NaturalPrescription, "green", "規律散步"),
            ]
        );
    }

    #[test]
    fn other_categories_are_not_tagged() {
        let mut links = LinkMap::new();
        links.declare(Category::Drug, keywords(&["阿斯匹靈"]));
        links.declare(Category::Symptom, keywords(&["頭痛"]));
        assert!(related_tags(&links).is_empty());
    }

    #[test]
    fn empty_map_has_no_tags() {
        assert!(related_tags(&LinkMap::new()).is_empty());
    }
}
