//! Bing dictionary lookup plugin.
//!
//! [`lookup`] turns a word or phrase into the fixed-origin query URL,
//! fetches the page and hands the body to the extractor. Every outcome
//! except an empty query resolves to a [`LookupResult`]; transport and
//! parse failures travel inside it as [`bingdict_output::ErrorInfo`].

use bingdict_config::LookupConfig;
use bingdict_fetch::{Fetch, HttpFetcher};
use bingdict_output::{ErrorCode, LookupResult};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

/// Source identifier attached to every result.
pub const PLUGIN_NAME: &str = "Bing";

const SEARCH_ORIGIN: &str = "http://cn.bing.com/dict/search?q=";

/// Characters JavaScript's `encodeURIComponent` leaves verbatim; the query
/// URL is surfaced in results and must reproduce that encoding byte for
/// byte.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The only caller-visible failure that is not represented as an
/// [`bingdict_output::ErrorInfo`] inside the result.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("query word must not be empty")]
    EmptyQuery,
}

/// Fixed-origin query URL for a word.
pub fn query_url(word: &str) -> String {
    format!("{SEARCH_ORIGIN}{}", utf8_percent_encode(word, QUERY))
}

/// Look up a word or phrase online. `config` falls back to
/// [`LookupConfig::default`] when `None`.
pub async fn lookup(
    word: &str,
    config: Option<LookupConfig>,
) -> Result<LookupResult, LookupError> {
    if word.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let config = config.unwrap_or_default();

    match HttpFetcher::new(&config) {
        Ok(fetcher) => lookup_with(&fetcher, word).await,
        Err(error) => {
            warn!("transport setup failed: {error}");
            Ok(branded(
                LookupResult::from_error(ErrorCode::Other, None),
                query_url(word),
            ))
        }
    }
}

/// Same as [`lookup`] but over an explicit transport, so tests can drive
/// the orchestrator with canned pages and simulated faults.
pub async fn lookup_with<F: Fetch>(
    fetcher: &F,
    word: &str,
) -> Result<LookupResult, LookupError> {
    if word.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let url = query_url(word);
    debug!(word, %url, "dictionary lookup");

    let result = match fetcher.fetch_body(&url).await {
        Ok(body) => bingdict_parser::extract(&body),
        Err(error) if error.is_network() => {
            warn!("lookup failed: {error}");
            LookupResult::from_error(ErrorCode::NetworkError, None)
        }
        Err(error) => {
            warn!("lookup failed: {error}");
            LookupResult::from_error(ErrorCode::Other, None)
        }
    };

    Ok(branded(result, url))
}

/// Provenance metadata goes on every result, success or failure.
fn branded(mut result: LookupResult, url: String) -> LookupResult {
    result.plugin_name = PLUGIN_NAME.to_owned();
    result.url = url;
    result
}
