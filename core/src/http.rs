//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the HTTP exchange as plain data. The core builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! a `Transport` (or the caller) executes the round-trip in between.
//!
//! Every Wortschatz call is a SOAP `POST`, so the request carries no method.
//! All fields use owned types so values can be moved across threads and
//! recorded by test transports without lifetime concerns.

/// A SOAP request described as plain data.
///
/// Built by `WortschatzClient::build`. The transport posts `body` to `url`
/// with the given headers and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// passed to `WortschatzClient::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response with `body` and no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
