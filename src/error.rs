use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Parameter or configuration key that caused the error (e.g., "term_count", "timeout_ms")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config_loader", "response_decoder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Error type for every client operation.
///
/// Each variant is one failure category a caller can match on; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {message}{}", format_context(.context))]
    InvalidInput {
        message: String,
        context: ErrorContext,
    },

    #[error("Request timed out for expression '{expression}': {message}")]
    Timeout { expression: String, message: String },

    #[error("Connection failed for expression '{expression}': {message}")]
    ConnectionFailed { expression: String, message: String },

    #[error("{}", format_request_failed(.status, .expression, .message))]
    RequestFailed {
        status: Option<u16>,
        expression: String,
        message: String,
    },

    #[error("Unexpected error occurred: {message}{}", format_context(.context))]
    Unexpected {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_request_failed(status: &Option<u16>, expression: &str, message: &str) -> String {
    match status {
        Some(code) => format!(
            "HTTP error {} for expression '{}': {}",
            code, expression, message
        ),
        None => format!("Request failed for expression '{}': {}", expression, message),
    }
}

/// Closed classification of [`Error`], one entry per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Timeout,
    ConnectionFailed,
    RequestFailed,
    Unexpected,
    Configuration,
}

impl ErrorKind {
    /// Returns the snake_case name (e.g., `"connection_failed"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Timeout => "timeout",
            Self::ConnectionFailed => "connection_failed",
            Self::RequestFailed => "request_failed",
            Self::Unexpected => "unexpected",
            Self::Configuration => "configuration",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    pub fn invalid_input_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidInput {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn unexpected_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Unexpected {
            message: msg.into(),
            context,
        }
    }

    /// Map a transport failure for `expression` onto the client taxonomy.
    pub fn from_transport(err: TransportError, expression: &str) -> Self {
        let expression = expression.to_string();
        match err {
            TransportError::Timeout(message) => Error::Timeout {
                expression,
                message,
            },
            TransportError::Connect(message) => Error::ConnectionFailed {
                expression,
                message,
            },
            TransportError::Http(e) => Error::RequestFailed {
                status: e.status().map(|s| s.as_u16()),
                expression,
                message: e.to_string(),
            },
            TransportError::Other(message) => Error::Unexpected {
                message,
                context: ErrorContext::new()
                    .with_details(format!("expression: {}", expression))
                    .with_source("transport"),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::ConnectionFailed { .. } => ErrorKind::ConnectionFailed,
            Error::RequestFailed { .. } => ErrorKind::RequestFailed,
            Error::Unexpected { .. } => ErrorKind::Unexpected,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// HTTP status reported by the service, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidInput { context, .. }
            | Error::Unexpected { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
