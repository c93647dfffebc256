use bingdict_output::Suggest;
use scraper::ElementRef;
use tracing::debug;

use crate::selectors::Selectors;
use crate::text::remove_tags_and_spaces;

/// When the lookup found no definition, the page offers alternative terms:
/// per row an anchor with the candidate term and a sibling block with its
/// gloss, both read as inner markup and normalized.
pub(crate) fn extract(container: ElementRef<'_>, selectors: &Selectors) -> Vec<Suggest> {
    container
        .select(&selectors.suggest_row)
        .map(|row| {
            let term = first_child_named(row, "a")
                .map(|el| el.inner_html())
                .unwrap_or_default();
            let gloss = first_child_named(row, "div")
                .map(|el| el.inner_html())
                .unwrap_or_default();

            let suggest = Suggest::new(remove_tags_and_spaces(&term), remove_tags_and_spaces(&gloss));
            debug!(term = %suggest.term, gloss = %suggest.gloss, "suggest row");

            suggest
        })
        .collect()
}

fn first_child_named<'a>(row: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn run(body: &str) -> Vec<Suggest> {
        let html = format!("<div class=\"content\">{body}</div>");
        let document = Html::parse_fragment(&html);
        let selectors = Selectors::new().unwrap();
        let container = document
            .select(&selectors.suggestions)
            .next()
            .expect("container");
        extract(container, &selectors)
    }

    #[test]
    fn maps_anchor_and_block_per_row() {
        let suggests = run(
            "<div class=\"df_wb_c\"><a href=\"/dict/search?q=offal\">offal</a>\
             <div>n. <b>内脏</b>；下脚料</div></div>\
             <div class=\"df_wb_c\"><a href=\"/dict/search?q=offend\">offend</a>\
             <div>v. 冒犯</div></div>",
        );
        assert_eq!(suggests.len(), 2);
        assert_eq!(suggests[0], Suggest::new("offal", "n. 内脏；下脚料"));
        assert_eq!(suggests[1], Suggest::new("offend", "v. 冒犯"));
    }

    #[test]
    fn row_without_anchor_keeps_empty_term() {
        let suggests = run("<div class=\"df_wb_c\"><div>gloss only</div></div>");
        assert_eq!(suggests, vec![Suggest::new("", "gloss only")]);
    }

    #[test]
    fn container_without_rows_yields_nothing() {
        assert!(run("<p>plain prose</p>").is_empty());
    }
}
