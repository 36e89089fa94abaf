//! Reservation REST API Client
//!
//! HTTP client for the remote reservation API. Resource-specific calls live in
//! the sibling modules as further `impl ApiClient` blocks.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::error::{ClientError, ClientResult};
use crate::endpoints::{Endpoint, Method};
use crate::models::ApiErrorBody;

/// Reservation API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix (e.g., "http://localhost:3000/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn builder(&self, endpoint: &Endpoint, request_id: Uuid) -> RequestBuilder {
        let url = endpoint.url(&self.config.base_url);
        let builder = match endpoint.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
        };
        builder.header("x-request-id", request_id.to_string())
    }

    /// Send a request and turn non-success statuses into [`ClientError::Api`]
    async fn execute(
        &self,
        endpoint: &Endpoint,
        request_id: Uuid,
        builder: RequestBuilder,
    ) -> ClientResult<Response> {
        let started = Instant::now();

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, &self.config.base_url))?;

        let status = response.status();
        tracing::debug!(
            request_id = %request_id,
            endpoint = %endpoint,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API call finished"
        );

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = ApiErrorBody::parse(&text).and_then(|body| body.message());
        tracing::warn!(
            request_id = %request_id,
            endpoint = %endpoint,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "API call failed"
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Call an endpoint without a body and decode the JSON response
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ClientResult<T> {
        let request_id = Uuid::new_v4();
        let builder = self.builder(&endpoint, request_id);
        let response = self.execute(&endpoint, request_id, builder).await?;
        Self::decode(response).await
    }

    /// Call an endpoint with a JSON body and decode the JSON response
    pub(crate) async fn send<B, T>(&self, endpoint: Endpoint, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        let builder = self.builder(&endpoint, request_id).json(body);
        let response = self.execute(&endpoint, request_id, builder).await?;
        Self::decode(response).await
    }

    /// Call an endpoint whose response body is irrelevant
    pub(crate) async fn call(&self, endpoint: Endpoint) -> ClientResult<()> {
        let request_id = Uuid::new_v4();
        let builder = self.builder(&endpoint, request_id);
        self.execute(&endpoint, request_id, builder).await?;
        Ok(())
    }
}
