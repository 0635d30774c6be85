//! Client core for the Wortschatz Leipzig linguistic web services.
//!
//! # Overview
//! Exposes a fixed catalogue of lookups (frequencies, base forms, synonyms,
//! collocations, neighbours, ...) against the remote corpus service. Each
//! lookup sends one SOAP request and flattens the positional XML answer into
//! an ordered list of strings, or `None` when the service has no data.
//!
//! # Design
//! - `Operation` descriptors in a static table drive one generic dispatch
//!   path; there is no per-operation request code.
//! - `WortschatzClient` is stateless and does no I/O: `build` produces an
//!   `HttpRequest`, `parse` consumes an `HttpResponse` (host-does-IO).
//! - `Wortschatz` joins the client to a `Transport`; the `ureq` feature
//!   provides a blocking one.
//! - Arguments are a tagged `Argument` enum checked against the declared
//!   signature before anything is built.

pub mod args;
pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod http;
pub mod operation;
pub mod request;
pub mod response;
pub mod transport;

pub use args::{Argument, Param, ParamType};
pub use client::WortschatzClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use facade::{ResultList, Wortschatz};
pub use http::{HttpRequest, HttpResponse};
pub use operation::{Availability, Operation, PartOfSpeech, CATALOGUE, DEFAULT_LIMIT};
pub use request::{DataRow, SoapRequest};
pub use response::ResultFilter;
pub use transport::{Transport, TransportError};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
