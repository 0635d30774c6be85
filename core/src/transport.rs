//! The transport seam between the core and the network.
//!
//! # Design
//! The core never performs I/O itself. Anything that can turn an
//! `HttpRequest` into an `HttpResponse` can drive the facade: the bundled
//! `UreqTransport`, a test double, or a caller's own HTTP stack. Failures are
//! reported as a `TransportError` carrying a short classification and the
//! underlying message; the facade wraps it into `ApiError::External`.
//!
//! Non-2xx statuses are not transport failures. They are returned as data so
//! the client can tell a SOAP fault from a plain HTTP error.

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// A failure to complete the HTTP round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{class}: {message}")]
pub struct TransportError {
    /// Short classification such as `Timeout` or `ConnectionFailed`.
    pub class: String,
    pub message: String,
}

impl TransportError {
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: message.into(),
        }
    }
}

/// Executes one request/response exchange.
///
/// Implementations must be safe to share between threads; calls to
/// different endpoints may be in flight at the same time.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::time::Duration;

    use tracing::debug;

    use super::{Transport, TransportError};
    use crate::http::{HttpRequest, HttpResponse};

    /// Blocking transport over a shared `ureq::Agent`.
    ///
    /// Status codes are returned as data rather than errors, leaving their
    /// interpretation to the client.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new(timeout: Duration) -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(Some(timeout))
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.agent.post(&request.url);
            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }

            let mut response = builder.send(request.body.as_bytes())?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(key, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (key.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response.body_mut().read_to_string()?;
            debug!(url = %request.url, status, "transport round-trip complete");

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }

    impl From<ureq::Error> for TransportError {
        fn from(e: ureq::Error) -> Self {
            let class = match &e {
                ureq::Error::Timeout(_) => "Timeout",
                ureq::Error::Io(_) => "Io",
                ureq::Error::ConnectionFailed => "ConnectionFailed",
                ureq::Error::HostNotFound => "HostNotFound",
                ureq::Error::BadUri(_) => "BadUri",
                ureq::Error::StatusCode(_) => "HttpStatus",
                _ => "Http",
            };
            TransportError::new(class, e.to_string())
        }
    }
}
