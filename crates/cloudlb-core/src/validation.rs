//! Request shaping and validation
//!
//! Options values are shaped into the nested wire payload expected by the
//! service before submission. Shaping validates required fields; it is a
//! pure transformation with no side effects.

use crate::types::EnableOpts;
use thiserror::Error;

/// Errors that can occur while shaping an options value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Capability of producing the wire payload for the enable operation
///
/// Implemented by [`EnableOpts`]; callers with unusual needs can provide
/// their own implementation.
pub trait EnableOptsBuilder {
    /// Build the request body
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a required field is missing. No payload
    /// is produced alongside an error.
    fn to_persistence_body(&self) -> Result<serde_json::Value, ValidationError>;
}

impl EnableOptsBuilder for EnableOpts {
    /// Shape the options into
    /// `{"sessionPersistence": {"persistenceType": <type>}}`.
    ///
    /// Only non-emptiness of the type is validated; unknown values are
    /// passed through for the remote service to judge.
    fn to_persistence_body(&self) -> Result<serde_json::Value, ValidationError> {
        let persistence_type = match &self.persistence_type {
            Some(t) if !t.as_str().is_empty() => t,
            _ => {
                return Err(ValidationError::MissingField(
                    "persistence_type".to_string(),
                ))
            }
        };

        Ok(serde_json::json!({
            "sessionPersistence": {
                "persistenceType": persistence_type,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersistenceType;

    #[test]
    fn test_shapes_http_cookie() {
        let opts = EnableOpts {
            persistence_type: Some(PersistenceType::HttpCookie),
        };
        assert_eq!(
            opts.to_persistence_body().unwrap(),
            serde_json::json!({"sessionPersistence": {"persistenceType": "HTTPCOOKIE"}})
        );
    }

    #[test]
    fn test_shapes_source_ip() {
        let opts = EnableOpts {
            persistence_type: Some(PersistenceType::SourceIp),
        };
        assert_eq!(
            opts.to_persistence_body().unwrap(),
            serde_json::json!({"sessionPersistence": {"persistenceType": "SOURCEIP"}})
        );
    }

    #[test]
    fn test_missing_type_fails() {
        let opts = EnableOpts::default();
        assert!(matches!(
            opts.to_persistence_body(),
            Err(ValidationError::MissingField(field)) if field == "persistence_type"
        ));
    }

    #[test]
    fn test_empty_type_fails() {
        let opts = EnableOpts {
            persistence_type: Some(PersistenceType::Other(String::new())),
        };
        assert!(matches!(
            opts.to_persistence_body(),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_unknown_type_is_passed_through() {
        let opts = EnableOpts {
            persistence_type: Some(PersistenceType::Other("LEASED".to_string())),
        };
        assert_eq!(
            opts.to_persistence_body().unwrap(),
            serde_json::json!({"sessionPersistence": {"persistenceType": "LEASED"}})
        );
    }
}
