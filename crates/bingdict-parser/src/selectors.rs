use scraper::Selector;

use crate::ExtractError;

/// Pre-parsed selectors for the regions and sub-elements of the dictionary
/// page. Built once per extraction and passed explicitly to every field
/// extractor, so extraction calls stay independently reentrant.
pub(crate) struct Selectors {
    /// Definition region (word entry).
    pub definition: Selector,
    /// Suggestion region (disambiguation page).
    pub suggestions: Selector,
    /// Phonetic block inside the definition region.
    pub phonetic: Selector,
    /// One definition list item.
    pub item: Selector,
    /// Part-of-speech label inside a list item.
    pub part_of_speech: Selector,
    /// Definition text inside a list item.
    pub definition_text: Selector,
    /// Example-sentence region, independent of the definition region.
    pub example_container: Selector,
    /// One example sentence row.
    pub example_row: Selector,
    /// One suggestion row.
    pub suggest_row: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            definition: parse(".qdef")?,
            suggestions: parse(".content")?,
            phonetic: parse(".hd_p1_1")?,
            item: parse("li")?,
            part_of_speech: parse(".pos")?,
            definition_text: parse(".def")?,
            example_container: parse("#sentenceCon")?,
            example_row: parse("#sentenceSeg .se_li1")?,
            suggest_row: parse(".df_wb_c")?,
        })
    }
}

fn parse(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(css, e.to_string()))
}
