//! Result types returned by the client.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SimplifyResponse`] | Decoded body of a simplify call |
//! | [`SimplificationResult`] | Expression that was sent plus the decoded body |

pub mod response;

pub use response::{SimplificationResult, SimplifyResponse};
