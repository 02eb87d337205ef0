//! Simplification client.
//!
//! Keep the public surface small: build a client once, then call
//! [`SimplificationClient::simplify`] or [`SimplificationClient::simplify_generated`].
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod validation;

pub use builder::SimplificationClientBuilder;
pub use core::SimplificationClient;
