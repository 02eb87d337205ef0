//! Request URL and header construction.

use crate::config::ServiceConfig;
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything needed to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// Joins the configured host and version segment with caller endpoints.
///
/// The endpoint is copied verbatim: no percent-encoding and no decoding, so
/// an expression such as `x^2 + 1` stays readable in the URL string.
#[derive(Debug, Clone)]
pub struct ApiRequestBuilder {
    base: String,
}

impl ApiRequestBuilder {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::from_parts(&config.base_url, &config.api_version)
    }

    pub fn from_parts(base_url: &str, api_version: &str) -> Self {
        let host = base_url.trim_end_matches('/');
        let version = api_version.trim_matches('/');
        let base = if version.is_empty() {
            format!("{}/", host)
        } else {
            format!("{}/{}/", host, version)
        };
        Self { base }
    }

    /// Base URL including the version segment, always ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base, endpoint.trim_start_matches('/'))
    }

    /// Like [`build_url`](Self::build_url), with form-encoded query parameters
    /// appended after a single `?`. An empty parameter list adds nothing.
    pub fn build_url_with_query<K, V>(&self, endpoint: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.build_url(endpoint);
        if params.is_empty() {
            return url;
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .finish();
        format!("{}?{}", url, query)
    }

    pub fn build_headers(&self, token: Option<&str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        if let Some(token) = token {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
        }
        headers
    }

    pub fn describe(&self, endpoint: &str, token: Option<&str>) -> RequestDescriptor {
        RequestDescriptor {
            url: self.build_url(endpoint),
            headers: self.build_headers(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://newton.vercel.app/api/v2/";

    fn builder() -> ApiRequestBuilder {
        ApiRequestBuilder::new(&ServiceConfig::default())
    }

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            builder().build_url("simplify/x+1"),
            format!("{}simplify/x+1", BASE)
        );
    }

    #[test]
    fn test_build_url_empty_endpoint() {
        assert_eq!(builder().build_url(""), BASE);
    }

    #[test]
    fn test_build_url_keeps_expression_verbatim() {
        let url = builder().build_url("simplify/x^2 + 2x + 1");
        assert_eq!(url, format!("{}simplify/x^2 + 2x + 1", BASE));
        // Already-encoded input is not decoded either.
        let url = builder().build_url("simplify/x%5E2");
        assert!(url.ends_with("simplify/x%5E2"));
    }

    #[test]
    fn test_no_double_slashes() {
        let builders = [
            ApiRequestBuilder::from_parts("https://newton.vercel.app/", "/api/v2/"),
            ApiRequestBuilder::from_parts("https://newton.vercel.app", "api/v2"),
            ApiRequestBuilder::from_parts("https://newton.vercel.app//", "//api/v2//"),
        ];
        for b in &builders {
            let url = b.build_url("/simplify/test");
            assert_eq!(url, format!("{}simplify/test", BASE));
            assert!(!url.trim_start_matches("https://").contains("//"));
        }
    }

    #[test]
    fn test_empty_version_segment() {
        let b = ApiRequestBuilder::from_parts("http://localhost:4010", "");
        assert_eq!(b.build_url("simplify/x"), "http://localhost:4010/simplify/x");
    }

    #[test]
    fn test_build_url_with_params() {
        let url = builder().build_url_with_query("test", &[("param1", "value1"), ("param2", "value2")]);
        assert_eq!(url, format!("{}test?param1=value1&param2=value2", BASE));
    }

    #[test]
    fn test_build_url_with_special_characters() {
        let url = builder().build_url_with_query("test", &[("expr", "x^2 + 2x + 1"), ("format", "json")]);
        assert_eq!(url.matches('?').count(), 1);
        assert!(url.contains("expr=x%5E2+%2B+2x+%2B+1"));
        assert!(url.contains("format=json"));
    }

    #[test]
    fn test_build_url_with_empty_params() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(builder().build_url_with_query("factor", &params), format!("{}factor", BASE));
    }

    #[test]
    fn test_build_url_different_endpoints() {
        for endpoint in ["simplify", "factor", "derive", "integrate"] {
            let url = builder().build_url(endpoint);
            assert!(url.ends_with(endpoint));
            assert!(url.starts_with(BASE));
        }
    }

    #[test]
    fn test_build_headers_without_token() {
        let headers = builder().build_headers(None);
        let expected: HashMap<String, String> =
            [(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string())].into_iter().collect();
        assert_eq!(headers, expected);
    }

    #[test]
    fn test_build_headers_with_token() {
        for token in ["abc", "token.with.dots", "token-with-dashes"] {
            let headers = builder().build_headers(Some(token));
            assert_eq!(headers.len(), 2);
            assert_eq!(headers[AUTHORIZATION], format!("Bearer {}", token));
            assert_eq!(headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        }
    }

    #[test]
    fn test_describe() {
        let d = builder().describe("simplify/2x", None);
        assert_eq!(d.url, format!("{}simplify/2x", BASE));
        assert_eq!(d.headers.len(), 1);
    }
}
