//! HTML extraction for the Bing dictionary result page.
//!
//! [`extract`] takes the raw page markup, decides which shape it represents
//! (word vs. phrase, Latin vs. non-Latin script, error page, suggestion
//! page) from which regions are present, and pulls the corresponding fields
//! into a [`LookupResult`]. Purely synchronous and side-effect free.

mod example;
mod phonetic;
mod selectors;
mod suggest;
mod text;
mod translate;

pub use example::MAX_EXAMPLES;
pub use text::remove_tags_and_spaces;

use bingdict_output::{ErrorCode, LookupResult};
use scraper::Html;
use tracing::warn;

use selectors::Selectors;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ExtractError {
    #[error("invalid selector `{0}`: {1}")]
    Selector(&'static str, String),
}

/// Extract structured results from a dictionary page.
///
/// Never panics: any internal failure is converted into a result carrying
/// a parse error with the underlying message. An unrecognized page shape is
/// NOT a failure; it comes back as an all-empty result.
pub fn extract(html: &str) -> LookupResult {
    match try_extract(html) {
        Ok(result) => result,
        Err(error) => {
            warn!("extraction failed: {error}");
            LookupResult::from_error(ErrorCode::ParseError, Some(error.to_string()))
        }
    }
}

fn try_extract(html: &str) -> Result<LookupResult, ExtractError> {
    let document = Html::parse_document(html);
    let selectors = Selectors::new()?;

    let definition = document.select(&selectors.definition).next();
    let suggestions = document.select(&selectors.suggestions).next();

    let mut result = LookupResult::empty();

    // Decision table over region presence:
    //
    //   definition | suggestions | extracted
    //   -----------+-------------+---------------------------------
    //   absent     | absent      | nothing (mixed-script query or a
    //              |             | generic error page; not a failure)
    //   present    | any         | phonetics + translates, examples
    //   any        | present     | suggests, examples
    if definition.is_none() && suggestions.is_none() {
        return Ok(result);
    }

    if let Some(container) = definition {
        result.phonetics = phonetic::extract(container, &selectors);
        result.translates = translate::extract(container, &selectors);
    }

    // The example corpus sits outside both regions and can match even when
    // no definition rendered.
    result.examples = example::extract(&document, &selectors);

    if let Some(container) = suggestions {
        result.suggests = suggest::extract(container, &selectors);
    }

    Ok(result)
}
