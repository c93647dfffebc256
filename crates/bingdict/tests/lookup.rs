//! Orchestrator behavior over stubbed transports: provenance on every
//! path, error classification, and the empty-query rejection.

use bingdict::{LookupError, lookup, lookup_with, query_url};
use bingdict_fetch::{Fetch, FetchError};
use bingdict_output::ErrorCode;

const EN_WORD: &str = include_str!("../../bingdict-parser/tests/fixtures/en_word.html");
const SUGGEST: &str = include_str!("../../bingdict-parser/tests/fixtures/suggest.html");

/// Transport stub answering every request with one canned page.
struct PageFetcher(&'static str);

#[async_trait::async_trait]
impl Fetch for PageFetcher {
    async fn fetch_body(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.0.to_string())
    }
}

/// Transport stub simulating a terminal fault.
struct FailingFetcher {
    network: bool,
}

#[async_trait::async_trait]
impl Fetch for FailingFetcher {
    async fn fetch_body(&self, _url: &str) -> Result<String, FetchError> {
        if self.network {
            Err(FetchError::Network("connect timed out".into()))
        } else {
            Err(FetchError::Other("body decode failed".into()))
        }
    }
}

#[tokio::test]
async fn successful_lookup_carries_provenance_and_fields() {
    let result = lookup_with(&PageFetcher(EN_WORD), "world").await.unwrap();

    assert_eq!(result.plugin_name, "Bing");
    assert_eq!(result.url, "http://cn.bing.com/dict/search?q=world");
    assert!(result.error.is_none());
    assert_eq!(result.phonetics.len(), 2);
    assert_eq!(result.translates.len(), 2);
}

#[tokio::test]
async fn phrase_query_is_percent_encoded_in_url() {
    let result = lookup_with(&PageFetcher(SUGGEST), "hello world")
        .await
        .unwrap();

    assert_eq!(result.url, "http://cn.bing.com/dict/search?q=hello%20world");
    assert_eq!(result.url, query_url("hello world"));
    assert_eq!(result.suggests.len(), 9);
}

#[tokio::test]
async fn network_fault_becomes_network_error_info() {
    let result = lookup_with(&FailingFetcher { network: true }, "world")
        .await
        .unwrap();

    let error = result.error.expect("error info");
    assert_eq!(error.code, ErrorCode::NetworkError);
    assert!(result.phonetics.is_empty());
    assert!(result.translates.is_empty());
    assert_eq!(result.plugin_name, "Bing");
    assert_eq!(result.url, "http://cn.bing.com/dict/search?q=world");
}

#[tokio::test]
async fn other_fault_becomes_other_error_info() {
    let result = lookup_with(&FailingFetcher { network: false }, "world")
        .await
        .unwrap();

    assert_eq!(result.error.expect("error info").code, ErrorCode::Other);
}

#[tokio::test]
async fn empty_word_is_rejected_before_any_transport() {
    let stubbed = lookup_with(&PageFetcher(EN_WORD), "").await;
    assert!(matches!(stubbed, Err(LookupError::EmptyQuery)));

    // The real transport path validates before building a client.
    let direct = lookup("", None).await;
    assert!(matches!(direct, Err(LookupError::EmptyQuery)));
}
