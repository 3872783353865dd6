//! # cloudlb HTTP client
//!
//! HTTP client for the cloud load balancer API.
//!
//! This crate provides:
//! - A reqwest-based [`ServiceClient`] with a generic request capability
//! - The `sessions` module with the session persistence operations
//! - Error types covering validation and remote failures
//!
//! ## Example
//!
//! ```ignore
//! use cloudlb_core::{EnableOpts, PersistenceType};
//! use cloudlb_http::{sessions, ServiceClient};
//!
//! let client = ServiceClient::new("https://lb.example.com/v1.0/1234")?;
//!
//! let opts = EnableOpts {
//!     persistence_type: Some(PersistenceType::HttpCookie),
//! };
//! sessions::enable(&client, 71, &opts).await?;
//!
//! let config = sessions::get(&client, 71).await?;
//! println!("{}", config.persistence_type);
//!
//! sessions::disable(&client, 71).await?;
//! ```

mod client;
mod error;
pub mod sessions;

pub use client::{RequestOpts, ServiceClient};
pub use error::HttpError;
