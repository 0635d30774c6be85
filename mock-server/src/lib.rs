//! In-process stand-in for the Wortschatz SOAP services.
//!
//! Serves `POST /axis/services/{service}` with canned answers so the client
//! can be exercised end-to-end without the public endpoint. Restricted
//! services answer with the same SOAP fault the real service sends to
//! anonymous users.

mod fixtures;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use quick_xml::{escape::escape, events::Event, Reader};
use tokio::net::TcpListener;
use tracing::debug;

/// Every service name the mock answers for.
pub const SERVICES: &[&str] = &[
    "Frequencies",
    "Baseform",
    "Sachgebiet",
    "Wordforms",
    "Thesaurus",
    "Synonyms",
    "Sentences",
    "LeftNeighbours",
    "RightNeighbours",
    "Similarity",
    "ExperimentalSynonyms",
    "NGrams",
    "NGramReferences",
    "RightCollocationFinder",
    "LeftCollocationFinder",
    "Cooccurrences",
    "CooccurrencesAll",
    "Kookkurrenzschnitt",
    "Kreuzwortraetsel",
];

/// Services that need credentials the anonymous account does not have.
pub const RESTRICTED: &[&str] = &["CooccurrencesAll", "Kookkurrenzschnitt"];

pub const ACCESS_DENIED: &str = "You're not allowed to access this service.";

const DEFAULT_LIMIT: usize = 10;

/// Canned rows keyed by `(service, first argument)`.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    entries: HashMap<(String, String), Vec<Vec<String>>>,
}

impl Corpus {
    pub fn builtin() -> Self {
        let mut corpus = Self::default();
        for (service, word, rows) in fixtures::BUILTIN {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|field| field.to_string()).collect())
                .collect();
            corpus.insert(service, word, rows);
        }
        corpus
    }

    pub fn insert(&mut self, service: &str, word: &str, rows: Vec<Vec<String>>) {
        self.entries
            .insert((service.to_string(), word.to_string()), rows);
    }

    pub fn lookup(&self, service: &str, word: &str) -> &[Vec<String>] {
        self.entries
            .get(&(service.to_string(), word.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub type Db = Arc<Corpus>;

pub fn app() -> Router {
    app_with(Corpus::builtin())
}

pub fn app_with(corpus: Corpus) -> Router {
    Router::new()
        .route("/axis/services/{service}", post(execute))
        .with_state(Arc::new(corpus))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn execute(
    State(db): State<Db>,
    Path(service): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !SERVICES.contains(&service.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    if !has_basic_auth(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"axis\"")],
        )
            .into_response();
    }
    if RESTRICTED.contains(&service.as_str()) {
        return fault("soapenv:Server.userException", ACCESS_DENIED);
    }

    let rows = match data_rows(&body) {
        Ok(rows) => rows,
        Err(message) => return fault("soapenv:Client", &message),
    };
    let word = rows.first().map(|(_, value)| value.as_str()).unwrap_or("");
    let limit = rows
        .iter()
        .find(|(key, _)| key == "Limit")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(DEFAULT_LIMIT);
    debug!(%service, %word, limit, "execute");

    let answer: Vec<&Vec<String>> = db.lookup(&service, word).iter().take(limit).collect();
    xml(StatusCode::OK, execute_response(&service, &answer))
}

fn has_basic_auth(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Basic "))
}

/// Pull the `(key, value)` pairs out of the request's `dataVectors`.
pub fn data_rows(body: &str) -> Result<Vec<(String, String)>, String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut rows = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut in_row = false;
    let mut saw_envelope = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) => match start.local_name().as_ref() {
                b"Envelope" => saw_envelope = true,
                b"dataVectors" => current = Some(Vec::new()),
                b"dataRow" => {
                    in_row = true;
                    if let Some(fields) = current.as_mut() {
                        fields.push(String::new());
                    }
                }
                _ => {}
            },
            Event::Empty(empty) if empty.local_name().as_ref() == b"dataRow" => {
                if let Some(fields) = current.as_mut() {
                    fields.push(String::new());
                }
            }
            Event::Text(text) if in_row => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                if let Some(field) = current.as_mut().and_then(|fields| fields.last_mut()) {
                    field.push_str(&text);
                }
            }
            Event::End(end) => match end.local_name().as_ref() {
                b"dataRow" => in_row = false,
                b"dataVectors" => {
                    if let Some(mut fields) = current.take() {
                        if fields.len() != 2 {
                            return Err(format!("dataVectors with {} rows", fields.len()));
                        }
                        let value = fields.pop().unwrap_or_default();
                        let key = fields.pop().unwrap_or_default();
                        rows.push((key, value));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_envelope {
        return Err("missing SOAP envelope".to_string());
    }
    Ok(rows)
}

fn execute_response(service: &str, rows: &[&Vec<String>]) -> String {
    let mut result = String::new();
    for row in rows {
        result.push_str(
            r#"<ns2:dataVectors xmlns:ns2="http://datatypes.webservice.wortschatz.uni_leipzig.de">"#,
        );
        for field in row.iter() {
            result.push_str(&format!("<ns2:dataRow>{}</ns2:dataRow>", escape(field.as_str())));
        }
        result.push_str("</ns2:dataVectors>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body><ns1:executeResponse xmlns:ns1="urn:{service}"><executeReturn><executionTime>0.001</executionTime><result>{result}</result></executeReturn></ns1:executeResponse></soapenv:Body></soapenv:Envelope>"#
    )
}

fn fault(code: &str, message: &str) -> Response {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body><soapenv:Fault><faultcode>{}</faultcode><faultstring>{}</faultstring></soapenv:Fault></soapenv:Body></soapenv:Envelope>"#,
        escape(code),
        escape(message)
    );
    xml(StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn xml(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/xml; charset=utf-8")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:urn="urn:x" xmlns:dat="urn:dat"><soapenv:Body><urn:execute><urn:objRequestParameters><urn:corpus>de</urn:corpus><urn:parameters><urn:dataVectors><dat:dataRow>Wort</dat:dataRow><dat:dataRow>Stuhl</dat:dataRow></urn:dataVectors><urn:dataVectors><dat:dataRow>Limit</dat:dataRow><dat:dataRow>2</dat:dataRow></urn:dataVectors></urn:parameters></urn:objRequestParameters></urn:execute></soapenv:Body></soapenv:Envelope>"#;

    #[test]
    fn data_rows_are_read_in_order() {
        let rows = data_rows(REQUEST).unwrap();
        assert_eq!(
            rows,
            vec![
                ("Wort".to_string(), "Stuhl".to_string()),
                ("Limit".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn data_rows_reject_non_soap() {
        assert!(data_rows("<foo/>").is_err());
        assert!(data_rows("<a><b></a>").is_err());
    }

    #[test]
    fn self_closing_row_is_an_empty_value() {
        let body = r#"<e:Envelope xmlns:e="urn:e"><dataVectors><dataRow>Wort</dataRow><dataRow/></dataVectors></e:Envelope>"#;
        assert_eq!(
            data_rows(body).unwrap(),
            vec![("Wort".to_string(), String::new())]
        );
    }

    #[test]
    fn data_rows_reject_half_pairs() {
        let body = r#"<e:Envelope xmlns:e="urn:e"><dataVectors><dataRow>Wort</dataRow></dataVectors></e:Envelope>"#;
        assert!(data_rows(body).is_err());
    }

    #[test]
    fn builtin_corpus_has_fixtures() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.lookup("Baseform", "Autos"), &[vec!["Auto".to_string(), "N".to_string()]]);
        assert!(corpus.lookup("Baseform", "Xyzzy").is_empty());
    }

    #[test]
    fn fixtures_only_use_known_services() {
        for (service, _, _) in fixtures::BUILTIN {
            assert!(SERVICES.contains(service), "{service}");
            assert!(!RESTRICTED.contains(service), "{service}");
        }
    }

    #[test]
    fn response_escapes_fields() {
        let row = vec!["a & b".to_string()];
        let xml = execute_response("Baseform", &[&row]);
        assert!(xml.contains("<ns2:dataRow>a &amp; b</ns2:dataRow>"));
        assert!(xml.contains(r#"xmlns:ns1="urn:Baseform""#));
    }
}
