//! Turning rendered segments into terminal text or HTML.
//!
//! Segments carry a category and a keyword; building the detail route and escaping happen here.

use hil_core::constants::RESULTS_ROUTE_PREFIX;
use hil_core::{Category, Keyword, RelatedTag, RenderedScenario, Segment};

/// Detail route for a keyword, e.g. `/results/nutrient/%E9%8E%82`.
pub fn detail_href(category: Category, keyword: &Keyword) -> String {
    format!(
        "{}/{}/{}",
        RESULTS_ROUTE_PREFIX,
        category.as_str(),
        urlencoding::encode(keyword.as_str())
    )
}

/// Plain text with links as `[label](href)`.
pub fn segments_to_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text { lines } => out.push_str(&lines.join("\n")),
            Segment::Link {
                category,
                keyword,
                label,
            } => out.push_str(&format!("[{}]({})", label, detail_href(*category, keyword))),
        }
    }
    out
}

/// An HTML paragraph. Text is escaped and line breaks become `<br/>`.
pub fn segments_to_html(segments: &[Segment]) -> String {
    let mut out = String::from("<p>");
    for segment in segments {
        match segment {
            Segment::Text { lines } => {
                let escaped: Vec<String> = lines.iter().map(|line| escape_html(line)).collect();
                out.push_str(&escaped.join("<br/>"));
            }
            Segment::Link {
                category,
                keyword,
                label,
            } => out.push_str(&format!(
                r#"<a href="{}" class="inline-link">{}</a>"#,
                escape_html(&detail_href(*category, keyword)),
                escape_html(label)
            )),
        }
    }
    out.push_str("</p>");
    out
}

fn tags_to_text(tags: &[RelatedTag]) -> String {
    tags.iter()
        .map(|tag| format!("[{}]({})", tag.keyword, detail_href(tag.category, &tag.keyword)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tags_to_html(tags: &[RelatedTag]) -> String {
    let links: Vec<String> = tags
        .iter()
        .map(|tag| {
            format!(
                r#"<a href="{}"><span class="tag tag-{}">{}</span></a>"#,
                escape_html(&detail_href(tag.category, &tag.keyword)),
                tag.colour,
                escape_html(tag.keyword.as_str())
            )
        })
        .collect();
    format!(r#"<div class="related-tags">{}</div>"#, links.join(""))
}

/// A scenario as terminal text.
pub fn scenario_to_text(scenario: &RenderedScenario) -> String {
    let mut out = String::new();
    out.push_str(&scenario.title);
    out.push('\n');
    if !scenario.description.is_empty() {
        out.push_str(&scenario.description);
        out.push('\n');
    }

    for item in &scenario.items {
        out.push_str(&format!("\nQ: {}\n", item.question));
        out.push_str(&segments_to_text(&item.answer));
        out.push('\n');
        if !item.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", tags_to_text(&item.tags)));
        }
    }

    if let Some(disclaimer) = &scenario.disclaimer {
        out.push_str(&format!("\n📌 {}\n", disclaimer));
    }
    out
}

/// A scenario as an HTML fragment.
pub fn scenario_to_html(scenario: &RenderedScenario) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape_html(&scenario.title)));
    out.push_str(&format!(
        "<p class=\"scenario-description\">{}</p>\n",
        escape_html(&scenario.description)
    ));

    for item in &scenario.items {
        out.push_str("<section class=\"qa\">\n");
        out.push_str(&format!(
            "<h3>{}</h3>\n{}\n",
            escape_html(&item.question),
            segments_to_html(&item.answer)
        ));
        if !item.tags.is_empty() {
            out.push_str(&tags_to_html(&item.tags));
            out.push('\n');
        }
        out.push_str("</section>\n");
    }

    if let Some(disclaimer) = &scenario.disclaimer {
        out.push_str(&format!(
            "<p class=\"disclaimer\">📌 {}</p>\n",
            escape_html(disclaimer)
        ));
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(category: Category, word: &str) -> Segment {
        Segment::link(category, Keyword::new(word).unwrap())
    }

    #[test]
    fn href_encodes_keyword() {
        let keyword = Keyword::new("維生素C").unwrap();
        assert_eq!(
            detail_href(Category::Nutrient, &keyword),
            "/results/nutrient/%E7%B6%AD%E7%94%9F%E7%B4%A0C"
        );
        let keyword = Keyword::new("a/b c").unwrap();
        assert_eq!(
            detail_href(Category::NaturalPrescription, &keyword),
            "/results/naturalPrescription/a%2Fb%20c"
        );
    }

    #[test]
    fn text_output_keeps_lines_and_links() {
        let segments = vec![
            Segment::text("第一行\n請補充"),
            link(Category::Nutrient, "鎂"),
        ];
        assert_eq!(
            segments_to_text(&segments),
            "第一行\n請補充[鎂](/results/nutrient/%E9%8E%82)"
        );
    }

    #[test]
    fn html_output_escapes_text_and_breaks_lines() {
        let segments = vec![
            Segment::text("<b>注意</b>\n劑量"),
            link(Category::Drug, "A&B"),
        ];
        assert_eq!(
            segments_to_html(&segments),
            "<p>&lt;b&gt;注意&lt;/b&gt;<br/>劑量<a href=\"/results/drug/A%26B\" class=\"inline-link\">A&amp;B</a></p>"
        );
    }
}
