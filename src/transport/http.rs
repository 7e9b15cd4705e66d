use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::{debug, error, instrument};

use crate::config::ApiConfig;
use crate::core::{RawResponse, RequestSpec, Transport};
use crate::error::{CongressApiError, ConfigError, Result};

const API_KEY_HEADER: &str = "x-api-key";

/// reqwest-backed transport. Every request carries the API key header and an
/// `accept` header matching the requested format.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CongressApiError::Http(e.to_string()))?;
        Self::with_client(client, config)
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS).
    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CongressApiError::Http(format!("invalid endpoint path '{path}': {e}")))
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut normalised = raw.trim().to_string();
    if !normalised.ends_with('/') {
        normalised.push('/');
    }
    Url::parse(&normalised).map_err(|e| ConfigError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(target = "congress_api::http", skip(self, request), fields(path = %request.path))]
    async fn get(&self, request: &RequestSpec) -> Result<RawResponse> {
        let url = self.endpoint_url(&request.path)?;
        debug!(url = %url, params = request.query.pairs().len(), "Sending request to Congress API");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, request.format.accept_header())
            .query(request.query.pairs())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                CongressApiError::Http(e.to_string())
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        debug!(status, content_type = ?content_type, "Received response from Congress API");

        let body = response
            .text()
            .await
            .map_err(|e| CongressApiError::Http(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}
