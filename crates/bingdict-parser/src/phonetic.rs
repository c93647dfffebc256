use bingdict_output::Phonetic;
use scraper::ElementRef;
use tracing::debug;

use crate::selectors::Selectors;
use crate::text::remove_tags_and_spaces;

/// Pull pronunciation variants out of the definition region.
///
/// A Latin-script entry renders the phonetic block as child elements
/// holding two labelled transcriptions; a non-Latin entry renders a single
/// plain-text reading with no child elements.
pub(crate) fn extract(container: ElementRef<'_>, selectors: &Selectors) -> Vec<Phonetic> {
    let Some(block) = container.select(&selectors.phonetic).next() else {
        return Vec::new();
    };

    let has_child_elements = block.children().any(|child| child.value().is_element());

    if has_child_elements {
        let inner = block.inner_html();
        let normalized = remove_tags_and_spaces(&inner);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        debug!(html = %inner, ?tokens, "phonetic block");

        // Expect label/transcription pairs for both variants; anything else
        // is an unexpected layout and reads as "no phonetics".
        if tokens.len() != 4 {
            return Vec::new();
        }

        tokens
            .chunks(2)
            .map(|pair| Phonetic::new(pair[0], pair[1]))
            .collect()
    } else {
        let reading = block.text().collect::<String>();

        if reading.is_empty() {
            Vec::new()
        } else {
            vec![Phonetic::new("", reading)]
        }
    }
}
