//! Tests against the real Newton service.
//!
//! These make network calls; run with: cargo test --test live_api -- --ignored

mod common;

use newton_client::SimplificationClient;

fn live_client() -> SimplificationClient {
    SimplificationClient::builder()
        .config(newton_client::ServiceConfig::from_env().expect("valid NEWTON_* environment"))
        .build()
        .expect("client builds")
}

#[test]
#[ignore = "calls the live simplification service"]
fn test_real_api_simple_expression() {
    let expression = common::INTEGRATION_SAFE[1];
    let result = live_client().simplify(expression).unwrap();

    assert_eq!(result.original_expression, expression);
    assert_eq!(result.response.operation, "simplify");
}

#[test]
#[ignore = "calls the live simplification service"]
fn test_real_api_complex_expression() {
    let result = live_client().simplify("x^2 + 2x + 1").unwrap();

    assert_eq!(result.original_expression, "x^2 + 2x + 1");
    assert!(!result.simplified().is_empty());
}

#[test]
#[ignore = "calls the live simplification service"]
fn test_real_api_various_expressions() {
    let client = live_client();
    for expression in common::INTEGRATION_SAFE {
        let result = client.simplify(expression).unwrap();
        assert_eq!(result.original_expression, *expression);
        assert_eq!(result.response.operation, "simplify");
    }
}

#[test]
#[ignore = "calls the live simplification service"]
fn test_real_api_response_structure() {
    let expression = common::INTEGRATION_SAFE[common::INTEGRATION_SAFE.len() - 1];
    let result = live_client().simplify(expression).unwrap();

    assert_eq!(result.response.operation, "simplify");
    assert_eq!(result.response.expression, expression);
}

#[test]
#[ignore = "calls the live simplification service"]
fn test_real_api_generated_expressions() {
    let client = live_client();
    for &(terms, min, max) in common::EDGE_PARAMS {
        let result = client.simplify_generated(terms, min, max).unwrap();
        assert!(!result.original_expression.is_empty());
        assert_eq!(result.response.operation, "simplify");
    }
}
