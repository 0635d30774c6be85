//! Verify `build`/`parse` against the JSON test vectors in `test-vectors/`.
//!
//! Each case names an operation and its arguments, the request that must be
//! built for them, a simulated response, and either the expected result list
//! or the expected error. Files are grouped by operation arity, plus one file
//! for failures reported by the far side.

use serde_json::Value;
use wortschatz_core::{
    ApiError, Argument, ClientConfig, HttpResponse, Operation, WortschatzClient,
};

const BASE_URL: &str = "http://localhost:3000/axis/services";

fn client() -> WortschatzClient {
    WortschatzClient::new(&ClientConfig::with_base_url(BASE_URL))
}

/// JSON strings become `Text`, JSON integers become `Integer`.
fn argument(value: &Value) -> Argument {
    match value {
        Value::String(s) => Argument::Text(s.clone()),
        Value::Number(n) => Argument::Integer(n.as_i64().unwrap()),
        other => panic!("unsupported argument in vector: {other}"),
    }
}

fn expected_rows(request: &Value) -> String {
    request["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            format!(
                "<urn:dataVectors><dat:dataRow>{}</dat:dataRow><dat:dataRow>{}</dat:dataRow></urn:dataVectors>",
                row[0].as_str().unwrap(),
                row[1].as_str().unwrap()
            )
        })
        .collect()
}

fn check_error(name: &str, err: ApiError, expected: &str) {
    match expected.split_once(':') {
        Some(("External", class)) => match err {
            ApiError::External { class: actual, .. } => {
                assert_eq!(actual, class, "{name}: external class")
            }
            other => panic!("{name}: expected External, got {other:?}"),
        },
        _ => panic!("{name}: unknown expected_error: {expected}"),
    }
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let op = Operation::lookup(case["operation"].as_str().unwrap()).unwrap();
        let args: Vec<Argument> = case["args"].as_array().unwrap().iter().map(argument).collect();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build(op, &args).unwrap();
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert!(
            req.body.contains(&format!(
                "<urn:parameters>{}</urn:parameters>",
                expected_rows(expected_req)
            )),
            "{name}: parameters in {}",
            req.body
        );
        assert!(req.body.contains("<urn:corpus>de</urn:corpus>"), "{name}: corpus");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse(op, response);

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Option<Vec<String>> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

#[test]
fn one_parameter_test_vectors() {
    run_vectors(include_str!("../../test-vectors/one_parameter.json"));
}

#[test]
fn two_parameter_test_vectors() {
    run_vectors(include_str!("../../test-vectors/two_parameters.json"));
}

#[test]
fn three_parameter_test_vectors() {
    run_vectors(include_str!("../../test-vectors/three_parameters.json"));
}

#[test]
fn fault_test_vectors() {
    run_vectors(include_str!("../../test-vectors/faults.json"));
}
