//! SOAP request assembly.
//!
//! # Design
//! `SoapRequest` is the structured form of one call: the namespace of the
//! target endpoint, the corpus selector and the ordered data rows.
//! `to_xml` is the only place that knows the envelope layout. Arguments are
//! assumed to be validated already.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::args::Argument;
use crate::error::{ApiError, ApiResult};
use crate::operation::{Operation, CORPUS};

pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const DATATYPES_NS: &str = "http://datatypes.webservice.wortschatz.uni_leipzig.de";

/// One key/value argument pair as written on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub key: String,
    pub value: String,
}

impl DataRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Structured request body for a single `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    pub namespace: String,
    pub corpus: &'static str,
    pub rows: Vec<DataRow>,
}

impl SoapRequest {
    pub fn new(namespace: impl Into<String>, rows: Vec<DataRow>) -> Self {
        Self {
            namespace: namespace.into(),
            corpus: CORPUS,
            rows,
        }
    }

    /// Pair each resolved argument with its parameter key, in order.
    pub fn for_operation(op: &Operation, namespace: impl Into<String>, args: &[Argument]) -> Self {
        let rows = op
            .params
            .iter()
            .zip(args)
            .map(|(param, arg)| DataRow::new(param.key, arg.to_wire()))
            .collect();
        Self::new(namespace, rows)
    }

    /// Serialise to a SOAP 1.1 envelope.
    pub fn to_xml(&self) -> ApiResult<String> {
        let mut writer = Writer::new(Vec::new());
        write_envelope(&mut writer, self).map_err(|e| ApiError::Serialization(e.to_string()))?;
        String::from_utf8(writer.into_inner()).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

fn write_envelope(writer: &mut Writer<Vec<u8>>, request: &SoapRequest) -> std::io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("soapenv:Envelope").with_attributes([
        ("xmlns:soapenv", SOAP_ENVELOPE_NS),
        ("xmlns:urn", request.namespace.as_str()),
        ("xmlns:dat", DATATYPES_NS),
    ])))?;
    start(writer, "soapenv:Body")?;
    start(writer, "urn:execute")?;
    start(writer, "urn:objRequestParameters")?;
    text_element(writer, "urn:corpus", request.corpus)?;
    start(writer, "urn:parameters")?;
    for row in &request.rows {
        start(writer, "urn:dataVectors")?;
        text_element(writer, "dat:dataRow", &row.key)?;
        text_element(writer, "dat:dataRow", &row.value)?;
        end(writer, "urn:dataVectors")?;
    }
    end(writer, "urn:parameters")?;
    end(writer, "urn:objRequestParameters")?;
    end(writer, "urn:execute")?;
    end(writer, "soapenv:Body")?;
    end(writer, "soapenv:Envelope")
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> std::io::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> std::io::Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}
