//! # cloudlb Core
//!
//! Core types and request shaping for the cloud load balancer API.
//!
//! This crate provides:
//! - Type definitions for the session persistence feature
//! - Options values and the payload-shaping capability
//! - Input validation
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudlb_core::{EnableOpts, EnableOptsBuilder, PersistenceType};
//!
//! let opts = EnableOpts {
//!     persistence_type: Some(PersistenceType::HttpCookie),
//! };
//!
//! // Shape the wire payload; fails if the type is missing
//! let body = opts.to_persistence_body()?;
//! ```

pub mod types;
pub mod validation;

// Re-exports for convenience
pub use types::*;
pub use validation::*;
