//! Random single-variable polynomial expressions.
//!
//! ```rust
//! use newton_client::generator::{ExpressionGenerator, GenerationParameters};
//!
//! let params = GenerationParameters::new(3, 1, 9).unwrap();
//! let mut generator = ExpressionGenerator::with_seed(7);
//! let expr = generator.generate(&params);
//! assert_eq!(expr.split_whitespace().count(), 5);
//! ```

use crate::{Error, ErrorContext, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Highest power of `x` a term may carry.
pub const MAX_POWER: u32 = 3;

/// Validated inputs for [`ExpressionGenerator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParameters {
    term_count: usize,
    min_coefficient: u64,
    max_coefficient: u64,
}

impl GenerationParameters {
    /// Checks, in order: `term_count > 0`, `min < max`, both bounds non-negative.
    pub fn new(term_count: i64, min_coefficient: i64, max_coefficient: i64) -> Result<Self> {
        if term_count <= 0 {
            return Err(Error::invalid_input_with_context(
                "term_count must be greater than 0",
                ErrorContext::new()
                    .with_field_path("term_count")
                    .with_details(format!("got {}", term_count)),
            ));
        }
        if min_coefficient >= max_coefficient {
            return Err(Error::invalid_input_with_context(
                "min_coefficient must be less than max_coefficient",
                ErrorContext::new()
                    .with_field_path("min_coefficient")
                    .with_details(format!("got {} >= {}", min_coefficient, max_coefficient)),
            ));
        }
        if min_coefficient < 0 || max_coefficient < 0 {
            return Err(Error::invalid_input_with_context(
                "min_coefficient and max_coefficient must be non-negative",
                ErrorContext::new()
                    .with_field_path("min_coefficient")
                    .with_details(format!("got {}..={}", min_coefficient, max_coefficient)),
            ));
        }

        let term_count = usize::try_from(term_count).map_err(|_| {
            Error::invalid_input_with_context(
                "term_count is too large",
                ErrorContext::new().with_field_path("term_count"),
            )
        })?;
        // Both bounds are non-negative by now.
        let min_coefficient = min_coefficient.unsigned_abs();
        let max_coefficient = max_coefficient.unsigned_abs();

        Ok(Self {
            term_count,
            min_coefficient,
            max_coefficient,
        })
    }

    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn min_coefficient(&self) -> u64 {
        self.min_coefficient
    }

    pub fn max_coefficient(&self) -> u64 {
        self.max_coefficient
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            term_count: 3,
            min_coefficient: 1,
            max_coefficient: 20,
        }
    }
}

/// One rendered component of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub coefficient: u64,
    pub power: u32,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.power, self.coefficient) {
            (0, c) => write!(f, "{}", c),
            (1, 1) => f.write_str("x"),
            (1, c) => write!(f, "{}x", c),
            (p, 1) => write!(f, "x^{}", p),
            (p, c) => write!(f, "{}x^{}", c, p),
        }
    }
}

/// Draw a full expression from `rng`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, params: &GenerationParameters) -> String {
    let mut out = String::new();
    for i in 0..params.term_count {
        if i > 0 {
            out.push_str(if rng.random_bool(0.5) { " + " } else { " - " });
        }
        let term = Term {
            coefficient: rng.random_range(params.min_coefficient..=params.max_coefficient),
            power: rng.random_range(0..=MAX_POWER),
        };
        out.push_str(&term.to_string());
    }
    out
}

/// Expression generator owning its random source.
pub struct ExpressionGenerator {
    rng: StdRng,
}

impl ExpressionGenerator {
    /// Seeded from the operating system; output is not reproducible.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, params: &GenerationParameters) -> String {
        generate_with(&mut self.rng, params)
    }
}

impl Default for ExpressionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExpressionGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionGenerator").finish_non_exhaustive()
    }
}
