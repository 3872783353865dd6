//! Reqwest-based service client

use crate::error::HttpError;
use reqwest::{Client, Method};
use std::time::Duration;

/// Options for a single API request
#[derive(Debug, Default)]
pub struct RequestOpts<'a> {
    /// JSON payload to serialize into the request body
    pub json_body: Option<&'a serde_json::Value>,
    /// Decode the response body as JSON when set
    pub json_response: bool,
    /// Status codes treated as success; empty means any 2xx
    pub ok_codes: &'a [u16],
}

/// Client for a load balancer API endpoint
///
/// Each call is a single independent request/response exchange; the client
/// holds no mutable state, so it can be shared freely across tasks.
///
/// # Example
///
/// ```ignore
/// use cloudlb_http::ServiceClient;
///
/// let client = ServiceClient::new("https://lb.example.com/v1.0/1234")?
///     .with_token("0123456789abcdef");
/// ```
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl ServiceClient {
    /// Create a client for the given endpoint
    ///
    /// A trailing slash on the endpoint is stripped.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a client with custom reqwest settings
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            client,
            endpoint,
            token: None,
        }
    }

    /// Attach an auth token, sent as `X-Auth-Token` on every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Join the endpoint with path segments
    pub fn service_url(&self, parts: &[&str]) -> String {
        format!("{}/{}", self.endpoint, parts.join("/"))
    }

    /// Issue a request and return the decoded response body, if requested
    ///
    /// The response status is checked against `opts.ok_codes`; anything
    /// outside the set is an [`HttpError::UnexpectedStatus`] carrying the
    /// raw body text. When `opts.json_response` is unset, or the body is
    /// empty, `Ok(None)` is returned and no decoding is attempted.
    pub async fn request(
        &self,
        method: Method,
        url: String,
        opts: RequestOpts<'_>,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.header("X-Auth-Token", token);
        }
        if let Some(body) = opts.json_body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        let accepted = if opts.ok_codes.is_empty() {
            response.status().is_success()
        } else {
            opts.ok_codes.contains(&status)
        };

        if !accepted {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::UnexpectedStatus {
                status,
                expected: opts.ok_codes.to_vec(),
                body,
            });
        }

        if !opts.json_response {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }
}
