//! Stateless request builder and response parser for the Wortschatz services.
//!
//! # Design
//! `WortschatzClient` holds only the base URL and the precomputed
//! `Authorization` header, and carries no mutable state between calls. Every
//! operation goes through the same two steps: `build` validates the
//! arguments and produces an `HttpRequest`, `parse` turns the matching
//! `HttpResponse` into a result list. The caller (or `Wortschatz`) executes
//! the HTTP round-trip in between, keeping this type deterministic and free
//! of I/O.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::args::{self, Argument};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::request::SoapRequest;
use crate::response;

/// Synchronous, stateless client for the Wortschatz SOAP services.
#[derive(Debug, Clone)]
pub struct WortschatzClient {
    base_url: String,
    authorization: String,
}

impl WortschatzClient {
    pub fn new(config: &ClientConfig) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", config.login, config.password));
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: format!("Basic {credentials}"),
        }
    }

    /// Endpoint URL of `op`. Also used as the request's `urn` namespace.
    pub fn endpoint(&self, op: &Operation) -> String {
        format!("{}/{}", self.base_url, op.service)
    }

    /// Validate `args` for `op` and build the SOAP request.
    ///
    /// The argument count is checked before availability so that a call with
    /// the wrong shape is always reported as a contract violation; argument
    /// types are checked after, so a disabled operation reports
    /// `NotImplemented` regardless of what it was given.
    pub fn build(&self, op: &Operation, args: &[Argument]) -> ApiResult<HttpRequest> {
        args::check_arity(op, args.len())?;
        if !op.is_available() {
            return Err(ApiError::NotImplemented { operation: op.name });
        }
        let args = args::validate(op, args)?;

        let url = self.endpoint(op);
        let body = SoapRequest::for_operation(op, url.as_str(), &args).to_xml()?;
        debug!(operation = op.name, %url, %body, "built request");

        Ok(HttpRequest {
            url,
            headers: vec![
                (
                    "content-type".to_string(),
                    "text/xml;charset=UTF-8".to_string(),
                ),
                ("soapaction".to_string(), "\"\"".to_string()),
                ("authorization".to_string(), self.authorization.clone()),
            ],
            body,
        })
    }

    /// Decode the response to a request built for `op`.
    ///
    /// Returns `Ok(None)` when the service answered but had nothing to say.
    pub fn parse(&self, op: &Operation, response: HttpResponse) -> ApiResult<Option<Vec<String>>> {
        debug!(
            operation = op.name,
            status = response.status,
            body = %response.body,
            "received response"
        );

        let document = response::parse_document(&response.body);
        if let Ok(document) = &document {
            if let Some((code, message)) = response::fault(document) {
                warn!(operation = op.name, %code, %message, "service returned a fault");
                return Err(ApiError::external("SoapFault", message));
            }
        }
        check_status(op, &response)?;

        let leaves = response::extract(&document?, op.filter);
        if leaves.is_none() {
            debug!(operation = op.name, "service returned no data");
        }
        Ok(leaves)
    }
}

/// Map a non-200 status without a SOAP fault to `ApiError::External`.
fn check_status(op: &Operation, response: &HttpResponse) -> ApiResult<()> {
    if response.status == 200 {
        return Ok(());
    }
    warn!(operation = op.name, status = response.status, "unexpected HTTP status");
    Err(ApiError::external(
        "HttpStatus",
        format!("HTTP {}: {}", response.status, response.body),
    ))
}
