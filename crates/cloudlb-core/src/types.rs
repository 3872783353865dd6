//! Wire types for the session persistence feature
//!
//! Session persistence pins a client's subsequent requests to the same
//! backend node, either via an HTTP cookie or via source-IP affinity.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Session persistence mechanism
///
/// Serializes as a plain JSON string. The two values the service documents
/// are `"HTTPCOOKIE"` and `"SOURCEIP"`; other non-empty values are carried
/// through verbatim and left for the remote service to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersistenceType {
    /// Pin clients via an HTTP cookie set by the load balancer
    HttpCookie,
    /// Pin clients via their source IP address
    SourceIp,
    /// A mechanism this library does not know about
    Other(String),
}

impl PersistenceType {
    /// The wire representation of this persistence type
    pub fn as_str(&self) -> &str {
        match self {
            PersistenceType::HttpCookie => "HTTPCOOKIE",
            PersistenceType::SourceIp => "SOURCEIP",
            PersistenceType::Other(value) => value,
        }
    }
}

impl Display for PersistenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PersistenceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HTTPCOOKIE" => PersistenceType::HttpCookie,
            "SOURCEIP" => PersistenceType::SourceIp,
            _ => PersistenceType::Other(value),
        }
    }
}

impl From<&str> for PersistenceType {
    fn from(value: &str) -> Self {
        PersistenceType::from(value.to_string())
    }
}

impl From<PersistenceType> for String {
    fn from(value: PersistenceType) -> Self {
        value.as_str().to_string()
    }
}

/// Session persistence configuration as reported by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionPersistence {
    pub persistence_type: PersistenceType,
}

/// Outer wrapper used on the wire for both requests and responses
///
/// The service nests the configuration under a `sessionPersistence` key:
/// `{"sessionPersistence": {"persistenceType": "HTTPCOOKIE"}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionPersistenceRoot {
    pub session_persistence: SessionPersistence,
}

/// Options value consumed by the enable operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnableOpts {
    /// Required. Either `HttpCookie` or `SourceIp`.
    pub persistence_type: Option<PersistenceType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PersistenceType::HttpCookie).unwrap(),
            "\"HTTPCOOKIE\""
        );
        assert_eq!(
            serde_json::to_string(&PersistenceType::SourceIp).unwrap(),
            "\"SOURCEIP\""
        );
        assert_eq!(
            serde_json::to_string(&PersistenceType::Other("LEASED".to_string())).unwrap(),
            "\"LEASED\""
        );
    }

    #[test]
    fn test_persistence_type_deserialization() {
        let parsed: PersistenceType = serde_json::from_str("\"HTTPCOOKIE\"").unwrap();
        assert_eq!(parsed, PersistenceType::HttpCookie);

        let parsed: PersistenceType = serde_json::from_str("\"SOURCEIP\"").unwrap();
        assert_eq!(parsed, PersistenceType::SourceIp);

        let parsed: PersistenceType = serde_json::from_str("\"NEWTYPE\"").unwrap();
        assert_eq!(parsed, PersistenceType::Other("NEWTYPE".to_string()));
    }

    #[test]
    fn test_persistence_type_display() {
        assert_eq!(PersistenceType::HttpCookie.to_string(), "HTTPCOOKIE");
        assert_eq!(PersistenceType::SourceIp.to_string(), "SOURCEIP");
        assert_eq!(
            PersistenceType::Other("X".to_string()).to_string(),
            "X"
        );
    }

    #[test]
    fn test_root_wrapper_roundtrip() {
        let root = SessionPersistenceRoot {
            session_persistence: SessionPersistence {
                persistence_type: PersistenceType::SourceIp,
            },
        };

        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"sessionPersistence":{"persistenceType":"SOURCEIP"}}"#);

        let parsed: SessionPersistenceRoot = serde_json::from_str(&json).unwrap();
        assert_eq!(root, parsed);
    }

    #[test]
    fn test_root_wrapper_decodes_wire_fixture() {
        let json = r#"{"sessionPersistence":{"persistenceType":"HTTPCOOKIE"}}"#;
        let parsed: SessionPersistenceRoot = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.session_persistence.persistence_type,
            PersistenceType::HttpCookie
        );
    }
}
