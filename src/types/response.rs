//! Simplify response shapes.

use serde::{Deserialize, Serialize};

/// Body returned by the simplify endpoint.
///
/// Fields beyond the three required ones are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifyResponse {
    pub operation: String,
    pub expression: String,
    pub result: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SimplifyResponse {
    pub fn new(
        operation: impl Into<String>,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            expression: expression.into(),
            result: result.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Outcome of one successful simplification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplificationResult {
    /// The expression exactly as sent (trimmed or generated).
    pub original_expression: String,
    pub response: SimplifyResponse,
}

impl SimplificationResult {
    /// Shorthand for `response.result`.
    pub fn simplified(&self) -> &str {
        &self.response.result
    }
}
