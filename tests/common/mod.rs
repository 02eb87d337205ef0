//! Shared fixtures: sample expressions and known service answers.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use newton_client::{SimplificationClient, SimplificationClientBuilder};
use serde_json::{json, Value};

pub const SIMPLE: &[&str] = &["x + x", "2x + 2x", "3x + 6", "2x + 4"];

pub const QUADRATIC: &[&str] = &[
    "x^2 + 2x + 1",
    "4x^2 + 4x + 1",
    "x^2 - 1",
    "x^2 - 4",
    "2x^2 + 4x^2",
];

pub const SINGLE_TERM: &[&str] = &["x", "2x", "x^2", "5x^3", "42"];

/// Expressions that are cheap to send to the real service.
pub const INTEGRATION_SAFE: &[&str] = &["x + x", "2x^2 + 4x^2", "3x + 6", "x^2 - 1", "2x + 3x"];

/// `(term_count, min, max)` combinations at the edges of the valid range.
pub const EDGE_PARAMS: &[(i64, i64, i64)] = &[(1, 1, 2), (5, 0, 20), (2, 10, 15)];

/// Known answers from the live service.
pub fn expected_response(expression: &str) -> Option<Value> {
    let result = match expression {
        "x + x" => "2 x",
        "x^2 + 2x + 1" => "(x + 1)^2",
        "2x^3 + 4x^2 - 6x" => "2 x (x^2 + 2 x - 3)",
        "3x + 6" => "3 (x + 2)",
        "2x + 4" => "2 (x + 2)",
        _ => return None,
    };
    Some(json!({
        "operation": "simplify",
        "expression": expression,
        "result": result,
    }))
}

/// Client pointed at a mock server, with a short timeout and a fixed seed.
pub fn client_for(server: &ServerGuard) -> SimplificationClient {
    builder_for(&server.url()).build().expect("client builds")
}

pub fn builder_for(base_url: &str) -> SimplificationClientBuilder {
    SimplificationClient::builder()
        .base_url(base_url)
        .timeout_ms(2_000)
        .seed(17)
}

/// Mock every simplify call with a fixed status and body.
pub fn mock_simplify(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", Matcher::Regex(r"^/api/v2/simplify/".to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
