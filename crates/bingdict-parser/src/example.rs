use bingdict_output::Example;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::selectors::Selectors;
use crate::text::remove_tags_and_spaces;

/// Most rows the example corpus contributes to one result.
pub const MAX_EXAMPLES: usize = 10;

/// Example sentences live in their own region and can match even when no
/// definition rendered (queries hit only by the example corpus), so the
/// container is located from the document root rather than the definition
/// region.
pub(crate) fn extract(document: &Html, selectors: &Selectors) -> Vec<Example> {
    let Some(container) = document.select(&selectors.example_container).next() else {
        return Vec::new();
    };

    container
        .select(&selectors.example_row)
        .take(MAX_EXAMPLES)
        .map(|row| {
            let mut cells = row.children().filter_map(ElementRef::wrap);
            let source = cells.next().map(cell_text).unwrap_or_default();
            let target = cells.next().map(cell_text).unwrap_or_default();

            debug!(%source, %target, "example row");

            Example::new(source, target)
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    remove_tags_and_spaces(&cell.text().collect::<String>())
}
