//! Error types for the HTTP client

use cloudlb_core::ValidationError;
use thiserror::Error;

/// Errors surfaced by load balancer API operations
///
/// Two kinds exist: local validation failures, raised before any request is
/// made, and remote failures (transport, unexpected status, undecodable
/// body). Operations never panic; every failure comes back through this
/// type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The options value failed validation; no request was issued
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The underlying HTTP request failed
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a status outside the accepted set
    #[error("Unexpected status {status} (expected one of {expected:?})")]
    UnexpectedStatus {
        status: u16,
        expected: Vec<u16>,
        /// Raw response body, preserved for diagnostics
        body: String,
    },

    /// The response body could not be decoded as JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
