//! # newton-client
//!
//! Client and test harness for the Newton algebra-simplification API.
//!
//! ## Overview
//!
//! The crate does no algebra itself. It builds request URLs, generates random
//! single-variable polynomial expressions, sends them to the remote simplify
//! endpoint and decodes the JSON answer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use newton_client::SimplificationClient;
//!
//! fn main() -> newton_client::Result<()> {
//!     let client = SimplificationClient::new()?;
//!
//!     let result = client.simplify("x^2 + 2x + 1")?;
//!     println!("{} => {}", result.original_expression, result.simplified());
//!
//!     let generated = client.simplify_generated(3, 2, 8)?;
//!     println!("{} => {}", generated.original_expression, generated.simplified());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Simplification client and its builder |
//! | [`config`] | Service configuration (defaults, env, YAML) |
//! | [`generator`] | Random expression generation |
//! | [`request`] | URL and header construction |
//! | [`transport`] | Blocking HTTP transport and the `Transport` seam |
//! | [`types`] | Response and result types |

pub mod client;
pub mod config;
pub mod generator;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{SimplificationClient, SimplificationClientBuilder};
pub use config::ServiceConfig;
pub use generator::{ExpressionGenerator, GenerationParameters};
pub use request::{ApiRequestBuilder, RequestDescriptor};
pub use types::{SimplificationResult, SimplifyResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
