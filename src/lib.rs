//! Source-text generator for boxed-numeric arithmetic methods.
//!
//! This crate emits the operator-overload method catalog for a boxed-numeric
//! runtime: cast-and-infix methods for every ordered pair of primitive-like
//! boxed types, and convert-then-invoke methods pairing `BigDecimal` and
//! `BigInteger` against the integral and real operand sets.
//!
//! # Architecture
//!
//! ```text
//! Tables → Generate (MethodDef records) → Render (target-language text)
//! ```
//!
//! Generation is pure and produces an ordered sequence of [`MethodDef`]
//! records; rendering to text is a separate step. All iteration orders are
//! fixed by the const tables in [`types`] and [`ops`], so the output is
//! byte-for-byte reproducible.

use thiserror::Error;

pub mod codegen;
pub mod method;
pub mod ops;
pub mod types;

pub use codegen::{generate_catalog, render_catalog, render_method, Catalog};
pub use method::MethodDef;
pub use ops::{ArithOp, BoolOp};
pub use types::LogicalType;

/// Catalog generation error
#[derive(Debug, Error)]
pub enum GenError {
    /// A type is missing from the promotion weight table
    #[error("No promotion weight for type: {0}")]
    MissingWeight(LogicalType),

    /// A type without a scalar representation reached the primitive-pair generator
    #[error("Type has no scalar representation: {0}")]
    NotPrimitive(LogicalType),

    /// A conversion target other than BigDecimal/BigInteger was requested
    #[error("Not an arbitrary-precision type: {0}")]
    NotBigNumber(LogicalType),

    /// Catalog serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog generation
pub type GenResult<T> = Result<T, GenError>;
