use crate::client::validation::validate_expression;
use crate::config::ServiceConfig;
use crate::generator::{ExpressionGenerator, GenerationParameters};
use crate::request::{ApiRequestBuilder, AUTHORIZATION};
use crate::transport::{HttpTransport, Transport};
use crate::types::{SimplificationResult, SimplifyResponse};
use crate::{Error, ErrorContext, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info};

use super::builder::SimplificationClientBuilder;

/// Client for the simplify endpoint.
///
/// Every call is one blocking GET: no retries, no caching, no partial results.
pub struct SimplificationClient<T: Transport = HttpTransport> {
    pub(crate) config: ServiceConfig,
    pub(crate) requests: ApiRequestBuilder,
    pub(crate) generator: Mutex<ExpressionGenerator>,
    pub(crate) transport: T,
}

impl SimplificationClient<HttpTransport> {
    /// Client with default configuration and the HTTP transport.
    pub fn new() -> Result<Self> {
        SimplificationClientBuilder::new().build()
    }

    pub fn builder() -> SimplificationClientBuilder {
        SimplificationClientBuilder::new()
    }
}

impl<T: Transport> fmt::Debug for SimplificationClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplificationClient")
            .field("base", &self.requests.base())
            .field("timeout_ms", &self.config.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> SimplificationClient<T> {
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn request_builder(&self) -> &ApiRequestBuilder {
        &self.requests
    }

    /// Simplify a literal expression.
    pub fn simplify(&self, expression: &str) -> Result<SimplificationResult> {
        self.simplify_custom(Some(expression))
    }

    /// Simplify a caller-supplied expression; `None`, empty and blank input are rejected.
    pub fn simplify_custom(&self, expression: Option<&str>) -> Result<SimplificationResult> {
        info!(expression = expression.unwrap_or_default(), "Simplifying custom expression");

        let expression = validate_expression(expression).map_err(|e| {
            error!(error = %e, "Invalid expression provided");
            e
        })?;
        debug!(expression, "Cleaned expression");

        self.execute(expression)
    }

    /// Generate an expression from raw parameters and simplify it.
    pub fn simplify_generated(
        &self,
        term_count: i64,
        min_coefficient: i64,
        max_coefficient: i64,
    ) -> Result<SimplificationResult> {
        info!(
            term_count,
            min_coefficient, max_coefficient, "Generating expression"
        );
        let params = GenerationParameters::new(term_count, min_coefficient, max_coefficient)
            .map_err(|e| {
                error!(error = %e, "Invalid parameters provided");
                e
            })?;
        self.simplify_generated_with(&params)
    }

    pub fn simplify_generated_with(
        &self,
        params: &GenerationParameters,
    ) -> Result<SimplificationResult> {
        let expression = self.generate_expression(params);
        info!(expression = expression.as_str(), "Generated expression");
        self.execute(&expression)
    }

    /// Draw an expression from this client's generator without sending it.
    pub fn generate_expression(&self, params: &GenerationParameters) -> String {
        self.generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate(params)
    }

    fn execute(&self, expression: &str) -> Result<SimplificationResult> {
        let endpoint = format!("{}/{}", self.config.simplify_path.trim_matches('/'), expression);
        let request = self
            .requests
            .describe(&endpoint, self.config.bearer_token.as_deref());
        info!(url = request.url.as_str(), "Built API URL");
        debug!(headers = ?redacted_headers(&request.headers), "Request headers");

        info!(timeout_ms = self.config.timeout_ms, "Sending GET request to simplify endpoint");
        let response = self
            .transport
            .get(&request.url, &request.headers, self.config.timeout())
            .map_err(|e| {
                let err = Error::from_transport(e, expression);
                error!(expression, kind = %err.kind(), error = %err, "Request failed");
                err
            })?;

        if !response.is_success() {
            error!(
                http_status = response.status,
                expression, "HTTP error from simplify endpoint"
            );
            return Err(Error::RequestFailed {
                status: Some(response.status),
                expression: expression.to_string(),
                message: status_message(response.status, &response.body),
            });
        }

        let decoded: SimplifyResponse = serde_json::from_str(&response.body).map_err(|e| {
            error!(expression, error = %e, "Response body is not a simplify result");
            Error::unexpected_with_context(
                format!("Invalid simplify response: {}", e),
                ErrorContext::new()
                    .with_details(format!("expression: {}", expression))
                    .with_source("response_decoder"),
            )
        })?;

        info!(expression, "Successfully received response");
        debug!(response = ?decoded, "Response data");

        Ok(SimplificationResult {
            original_expression: expression.to_string(),
            response: decoded,
        })
    }
}

/// Header map safe to log: credential values are masked.
fn redacted_headers(headers: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(AUTHORIZATION) {
                (name.as_str(), "<redacted>")
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

fn status_message(status: u16, body: &str) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status");
    let body = body.trim();
    if body.is_empty() {
        format!("{} {}", status, reason)
    } else {
        format!("{} {}: {}", status, reason, body)
    }
}
