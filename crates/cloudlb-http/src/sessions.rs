//! Session persistence operations
//!
//! Three operations map one-to-one onto HTTP verbs against the
//! `/loadbalancers/{id}/sessionpersistence` resource: enable (PUT),
//! get (GET) and disable (DELETE). Each is a single request/response
//! exchange with no state kept between calls.

use crate::client::{RequestOpts, ServiceClient};
use crate::error::HttpError;
use cloudlb_core::{EnableOptsBuilder, SessionPersistence, SessionPersistenceRoot};
use reqwest::Method;

fn root_url(c: &ServiceClient, lb_id: u64) -> String {
    c.service_url(&["loadbalancers", &lb_id.to_string(), "sessionpersistence"])
}

/// Enable session persistence for a load balancer
///
/// Shapes `opts` into the wire payload first; a validation failure returns
/// before any request is made. The service acknowledges with 202 Accepted.
/// Returns the decoded response body, `Null` when the acknowledgement
/// carries none.
pub async fn enable(
    c: &ServiceClient,
    lb_id: u64,
    opts: &impl EnableOptsBuilder,
) -> Result<serde_json::Value, HttpError> {
    let body = opts.to_persistence_body()?;

    let response = c
        .request(
            Method::PUT,
            root_url(c, lb_id),
            RequestOpts {
                json_body: Some(&body),
                json_response: true,
                ok_codes: &[202],
            },
        )
        .await?;

    Ok(response.unwrap_or(serde_json::Value::Null))
}

/// Show the session persistence configuration for a load balancer
pub async fn get(c: &ServiceClient, lb_id: u64) -> Result<SessionPersistence, HttpError> {
    let response = c
        .request(
            Method::GET,
            root_url(c, lb_id),
            RequestOpts {
                json_body: None,
                json_response: true,
                ok_codes: &[200],
            },
        )
        .await?;

    let root: SessionPersistenceRoot =
        serde_json::from_value(response.unwrap_or(serde_json::Value::Null))?;
    Ok(root.session_persistence)
}

/// Disable session persistence for a load balancer
///
/// Only success is observable; the response body, if any, is not decoded.
pub async fn disable(c: &ServiceClient, lb_id: u64) -> Result<(), HttpError> {
    c.request(
        Method::DELETE,
        root_url(c, lb_id),
        RequestOpts {
            json_body: None,
            json_response: false,
            ok_codes: &[202],
        },
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_url() {
        let client = ServiceClient::new("https://lb.example.com/v1.0/1234").unwrap();
        assert_eq!(
            root_url(&client, 12345),
            "https://lb.example.com/v1.0/1234/loadbalancers/12345/sessionpersistence"
        );
    }
}
