//! HTTP transport for the Kontent.ai REST APIs
//!
//! One client instance wraps one API surface (Management or Subscription):
//! a base URL plus the bearer key that authorizes it.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::error::ApiError;

/// Header identifying the calling client library, mirrored from the
/// official SDKs.
pub const SDK_ID_HEADER: &str = "X-KC-SDKID";

const DEFAULT_SDK_ID: &str = "rust;kontent-client;0.1.0";

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// API base URL (e.g. "https://manage.kontent.ai/v2")
    pub base_url: String,
    /// Bearer key for the Authorization header
    pub api_key: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Value sent in the X-KC-SDKID header
    pub sdk_id: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://manage.kontent.ai/v2".to_string(),
            api_key: String::new(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            sdk_id: DEFAULT_SDK_ID.to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set the bearer API key
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Override the SDK identification header value
    pub fn with_sdk_id(mut self, sdk_id: &str) -> Self {
        self.sdk_id = sdk_id.to_string();
        self
    }
}

/// Bearer-authenticated JSON client for one API surface
pub struct KontentHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl KontentHttpClient {
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.api_key)
    }

    /// Make a GET request and parse the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id)
            .send()
            .await?;

        self.handle_response(response, path).await
    }

    /// Make a GET request with extra request headers (e.g. x-continuation)
    pub async fn get_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        self.handle_response(response, path).await
    }

    /// Make a GET request, mapping 404 to `None`
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Make a PUT request with a JSON body and parse the JSON response
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id)
            .json(body)
            .send()
            .await?;

        self.handle_response(response, path).await
    }

    /// Make a PUT request with a JSON body, mapping a bodyless success
    /// (204, or a 2xx with an empty body) to `None`. Write endpoints may
    /// acknowledge without echoing the written resource back.
    pub async fn put_json_optional<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let url = self.build_url(path);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(None);
            }
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }

        let body = response.text().await.unwrap_or_default();
        error!("PUT {} failed with status {}: {}", path, status, body);
        Err(ApiError::from_response(status.as_u16(), path, body))
    }

    /// Make a POST request with a JSON body and parse the JSON response
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id)
            .json(body)
            .send()
            .await?;

        self.handle_response(response, path).await
    }

    /// Make a bodyless PUT request, discarding any response body.
    /// Used for state transitions like unpublish where the API returns 204.
    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .header("Authorization", self.bearer())
            .header(SDK_ID_HEADER, &self.config.sdk_id)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!("PUT {} failed with status {}: {}", path, status, body);
        Err(ApiError::from_response(status.as_u16(), path, body))
    }

    /// Classify non-2xx responses and parse JSON otherwise.
    /// Bodyless successes never reach this path; they go through
    /// `put_empty` or `put_json_optional`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        resource: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            let result = response.json::<T>().await?;
            return Ok(result);
        }

        let body = response.text().await.unwrap_or_default();
        error!("request to {} failed with status {}: {}", resource, status, body);
        Err(ApiError::from_response(status.as_u16(), resource, body))
    }
}
