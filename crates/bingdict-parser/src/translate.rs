use bingdict_output::Translate;
use scraper::ElementRef;
use tracing::debug;

use crate::selectors::Selectors;

/// One translation per definition list item, in document order. The
/// part-of-speech label loses its trailing period ("n." becomes "n"); the
/// definition text is taken verbatim.
pub(crate) fn extract(container: ElementRef<'_>, selectors: &Selectors) -> Vec<Translate> {
    container
        .select(&selectors.item)
        .map(|item| {
            let label = item
                .select(&selectors.part_of_speech)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();
            let part_of_speech = label.strip_suffix('.').unwrap_or(&label).to_owned();

            let definition = item
                .select(&selectors.definition_text)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default();

            debug!(%part_of_speech, %definition, "translate item");

            Translate::new(part_of_speech, definition)
        })
        .collect()
}
