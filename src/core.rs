//! Core request API: wraps a low-level transport with status mapping, retry with
//! exponential backoff, JSON decoding and offset/limit pagination.
//!
//! Quick start:
//! - **Typed**: use `client.bills()`, `client.amendments()` or `client.members()`
//! - **Generic**: use `CongressClient::get_typed::<R>()` for any endpoint path
//! - **Raw**: use `CongressClient::get_raw()` to receive the body in the configured format
//! - **Streaming**: use `CongressClient::pages()` to walk a list endpoint page by page

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_core::Stream;
use futures_util::{pin_mut, StreamExt};
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::{ApiConfig, ResponseFormat, MAX_RETRY_DELAY};
use crate::endpoints::{AmendmentEndpoint, BillEndpoint, MemberEndpoint};
use crate::error::{CongressApiError, Result, ValidationError};
use crate::pagination::{self, Limit, Query};
use crate::transport::HttpTransport;

/// A single GET against the API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub path: String,
    pub query: Query,
    pub format: ResponseFormat,
}

/// Undecoded response as produced by a transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Low-level transport abstraction.
///
/// Implementors perform exactly one request per call and report connection
/// failures as `CongressApiError::Http`. Status handling, retries and decoding
/// are done by `CongressClient`.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, request: &RequestSpec) -> Result<RawResponse>;

    /// Clone this transport into a boxed trait object
    fn clone_box(&self) -> Box<dyn Transport>;
}

impl Clone for Box<dyn Transport> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl Transport for Box<dyn Transport> {
    async fn get(&self, request: &RequestSpec) -> Result<RawResponse> {
        self.as_ref().get(request).await
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        self.as_ref().clone_box()
    }
}

/// Client for the Congress.gov API.
#[derive(Clone, Debug)]
pub struct CongressClient<T: Transport = HttpTransport> {
    config: Arc<ApiConfig>,
    transport: T,
}

impl CongressClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        info!(base_url = %config.base_url, format = %config.format, "Creating new Congress API client");
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client from `CONGRESS_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = ApiConfig::from_env().map_err(CongressApiError::Config)?;
        Self::new(config)
    }
}

impl<T: Transport> CongressClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn bills(&self) -> BillEndpoint<'_, T> {
        BillEndpoint::new(self)
    }

    pub fn amendments(&self) -> AmendmentEndpoint<'_, T> {
        AmendmentEndpoint::new(self)
    }

    pub fn members(&self) -> MemberEndpoint<'_, T> {
        MemberEndpoint::new(self)
    }

    /// Fetch `path` and decode the JSON document into `R`.
    pub async fn get_typed<R>(&self, path: &str, query: Query, limit: Option<Limit>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let value = self.get_value(path, query, limit).await?;
        R::deserialize(&value).map_err(|e| CongressApiError::Json(e, value.to_string()))
    }

    /// Generic request helper. Always asks for JSON.
    ///
    /// With no limit a single request is made. `Limit::Count(n)` must lie in
    /// `1..=max_limit`. `Limit::All` walks every page and merges the records
    /// under the response's data key.
    #[instrument(target = "congress_api::client", skip(self, query))]
    pub async fn get_value(&self, path: &str, mut query: Query, limit: Option<Limit>) -> Result<Value> {
        query.set("format", ResponseFormat::Json);
        match limit.map(|l| self.config.validate_limit(l)).transpose()? {
            None => self.fetch_json(path, &query).await,
            Some(Limit::Count(n)) => {
                query.set("limit", n);
                self.fetch_json(path, &query).await
            }
            Some(Limit::All) => self.collect_all(path, query).await,
        }
    }

    /// Fetch `path` in the configured response format and return the body unparsed.
    pub async fn get_raw(&self, path: &str, mut query: Query) -> Result<String> {
        query.set("format", self.config.format);
        let request = RequestSpec {
            path: path.to_string(),
            query,
            format: self.config.format,
        };
        Ok(self.send(&request).await?.body)
    }

    /// Lazily walk a list endpoint, one maximum-size page at a time, starting
    /// at the query's `offset`. Ends after the first page without a `next` link
    /// or with no records.
    pub fn pages<'a>(&'a self, path: &'a str, mut query: Query) -> impl Stream<Item = Result<Value>> + 'a {
        async_stream::try_stream! {
            query.set("format", ResponseFormat::Json);
            let mut offset: u64 = query
                .remove("offset")
                .and_then(|o| o.parse().ok())
                .unwrap_or(0);
            let mut key: Option<String> = None;

            loop {
                query.set("offset", offset).set("limit", self.config.max_limit);
                let page = self.fetch_json(path, &query).await?;

                let data_key = match &key {
                    Some(k) => k.clone(),
                    None => {
                        let k = pagination::data_key(&page)?;
                        key = Some(k.clone());
                        k
                    }
                };
                let received = pagination::page_len(&page, &data_key);
                let more = pagination::has_next(&page);
                debug!(path = %path, offset, received, more, "Fetched page");

                yield page;

                if !more || received == 0 {
                    break;
                }
                offset += received as u64;
            }
        }
    }

    async fn collect_all(&self, path: &str, query: Query) -> Result<Value> {
        let pages = self.pages(path, query);
        pin_mut!(pages);

        let mut first = match pages.next().await {
            Some(page) => page?,
            None => return Err(ValidationError::DataKey.into()),
        };
        if !pagination::has_next(&first) {
            return Ok(first);
        }

        let key = pagination::data_key(&first)?;
        let total = pagination::total_count(&first);
        let mut merged = first.get_mut(&key).map(Value::take).unwrap_or(Value::Null);
        let mut request = first.get_mut("request").map(Value::take);
        let mut page_count = 1usize;

        while let Some(page) = pages.next().await {
            let mut page = page?;
            if let Some(items) = page.get_mut(&key) {
                pagination::merge_data(&mut merged, items.take());
            }
            if let Some(r) = page.get_mut("request") {
                request = Some(r.take());
            }
            page_count += 1;
        }

        info!(path = %path, pages = page_count, total = ?total, "Collected all pages");
        let mut combined = Map::new();
        combined.insert(key, merged);
        combined.insert("pagination".to_string(), json!({ "count": total.unwrap_or(0) }));
        combined.insert("request".to_string(), request.unwrap_or_else(|| json!({})));
        Ok(Value::Object(combined))
    }

    async fn fetch_json(&self, path: &str, query: &Query) -> Result<Value> {
        let request = RequestSpec {
            path: path.to_string(),
            query: query.clone(),
            format: ResponseFormat::Json,
        };
        let response = self.send(&request).await?;
        if let Some(content_type) = response.content_type.as_deref() {
            if !is_json_content_type(content_type) {
                warn!(path = %path, content_type, "Expected a JSON response");
            }
        }
        serde_json::from_str(&response.body).map_err(|e| {
            warn!(path = %path, error = %e, "Failed to parse response JSON");
            CongressApiError::Json(e, response.body)
        })
    }

    /// Send with retry. Transport failures, 429 and 5xx are retried with
    /// exponential backoff; every other error is returned immediately.
    async fn send(&self, request: &RequestSpec) -> Result<RawResponse> {
        let attempts = self.config.max_retries.saturating_add(1);
        let mut attempt = 1;

        loop {
            let outcome = match self.transport.get(request).await {
                Ok(response) => check_status(&request.path, response),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < attempts => {
                    let delay = backoff_delay(self.config.retry_backoff, attempt);
                    warn!(path = %request.path, attempt, error = %e, delay_ms = delay.as_millis() as u64, "Request failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) if e.is_retryable() && attempts > 1 => {
                    warn!(path = %request.path, attempts, error = %e, "Giving up after retries");
                    return Err(CongressApiError::MaxRetriesExceeded {
                        attempts,
                        last: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// `base * 2^(attempt-1)`, capped at `MAX_RETRY_DELAY`.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
        .min(MAX_RETRY_DELAY)
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
}

fn check_status(path: &str, response: RawResponse) -> Result<RawResponse> {
    match response.status {
        _ if response.is_success() => Ok(response),
        401 | 403 => {
            warn!(status = response.status, "Congress API authentication failed");
            Err(CongressApiError::Authentication)
        }
        404 => Err(CongressApiError::NotFound(path.to_string())),
        429 => {
            warn!("Congress API rate limit exceeded");
            Err(CongressApiError::RateLimit)
        }
        status => Err(CongressApiError::Api {
            status,
            body: response.body,
        }),
    }
}
