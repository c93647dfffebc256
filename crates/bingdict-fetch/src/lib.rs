use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use bingdict_config::LookupConfig;

const BASE_BACKOFF_MS: u64 = 500;

/// Transport failure classes. `Network` is the distinguishable
/// connection/DNS/timeout fault callers map to their network error code;
/// everything else is `Other`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    fn classify(error: reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() {
            FetchError::Network(error.to_string())
        } else {
            FetchError::Other(error.to_string())
        }
    }
}

/// Body-fetching seam. The orchestrator talks to this trait so tests can
/// substitute canned pages or simulated faults for the real transport.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a browser-like header set, per-attempt
/// timeout, optional proxy and bounded retry with exponential backoff.
pub struct HttpFetcher {
    client: reqwest::Client,
    retries: u32,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().default_headers(browser_headers());

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| FetchError::Other(format!("invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self {
            client,
            retries: config.retries,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::classify)?;

        // The dictionary page answers errors with a regular HTML page, so
        // non-2xx statuses still flow to the extractor as a body.
        response.text().await.map_err(FetchError::classify)
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0u32;

        loop {
            match self.attempt(url).await {
                Ok(body) => {
                    debug!(url, bytes = body.len(), "fetched page");
                    return Ok(body);
                }
                Err(error @ FetchError::Network(_)) if attempt < self.retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        url,
                        attempt = attempt + 1,
                        retries = self.retries,
                        "fetch failed ({error}), backing off {}ms",
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt))
}

/// Header set the dictionary page expects from a browser. Accept-Encoding
/// is left to the client, which negotiates gzip/deflate itself.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Accept",
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        "Accept-Language",
        HeaderValue::from_static("zh-CN,zh;q=0.8"),
    );
    headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
    headers.insert("Pragma", HeaderValue::from_static("no-cache"));
    headers.insert(
        "Referer",
        HeaderValue::from_static("http://cn.bing.com/dict/?FORM=Z9LH3"),
    );
    headers.insert(
        "Upgrade-Insecure-Requests",
        HeaderValue::from_static("1"),
    );
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/59.0.3071.104 Safari/537.36",
        ),
    );
    headers
}
