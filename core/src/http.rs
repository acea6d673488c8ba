//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `PlayFabClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; a `Transport` executes the round-trip in between. Every PlayFab
//! call is a JSON POST, so the request carries no method.
//!
//! `UreqTransport` (default `ureq` feature) is a blocking transport for
//! hosts that do not bring their own.

use crate::error::TransportError;

/// A POST request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round-trip.
///
/// Every status code, including 4xx and 5xx, must come back as an
/// `HttpResponse`. Return `TransportError::Request` when no response arrived
/// and `TransportError::Body` when the status line arrived but the body could
/// not be read.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use super::{HttpRequest, HttpResponse, Transport};
    use crate::error::TransportError;

    /// Blocking transport backed by a `ureq` agent.
    ///
    /// The agent is configured so 4xx/5xx responses are returned as data
    /// rather than `Err`, leaving status interpretation to the client.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.agent.post(&request.url);
            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }

            let mut response = builder
                .send(request.body.as_bytes())
                .map_err(|e| TransportError::Request(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| TransportError::Body {
                    status,
                    message: e.to_string(),
                })?;

            Ok(HttpResponse { status, headers, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            url: "http://localhost/Client/GetTime".to_string(),
            headers: vec![("X-Authorization".to_string(), "ticket".to_string())],
            body: "{}".to_string(),
        };
        assert_eq!(req.header("x-authorization"), Some("ticket"));
        assert!(req.header("X-EntityToken").is_none());
    }

    #[test]
    fn success_range_is_2xx() {
        let mut resp = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 204;
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
        resp.status = 400;
        assert!(!resp.is_success());
    }
}
