//! Arbitrary-precision method generation.
//!
//! Emits comparison and arithmetic methods pairing a pivot type (BigDecimal
//! or BigInteger) against the integral and real operand sets. Both operands
//! are converted to the invocation's output type; comparisons delegate to
//! the output type's three-way `compareTo` tested against zero, arithmetic
//! to its named methods. A mirrored method with swapped operands is emitted
//! whenever the candidate type differs from the pivot.

use crate::method::MethodDef;
use crate::ops::{ArithOp, BoolOp, BIGNUM_OP_ORDER, BOOL_OP_ORDER};
use crate::types::{LogicalType, INT_NUMBERS, REAL_NUMBERS};
use crate::{GenError, GenResult};

/// Generate the arbitrary-precision section of the catalog.
pub(super) fn generate() -> GenResult<Vec<MethodDef>> {
    let mut methods = Vec::new();

    let real_and_bigdec: Vec<LogicalType> = REAL_NUMBERS
        .iter()
        .copied()
        .chain([LogicalType::BigDecimal])
        .collect();

    emit_operators(
        &mut methods,
        INT_NUMBERS,
        LogicalType::BigDecimal,
        LogicalType::BigDecimal,
    )?;
    emit_operators(
        &mut methods,
        &real_and_bigdec,
        LogicalType::BigDecimal,
        LogicalType::BigDecimal,
    )?;
    emit_operators(
        &mut methods,
        INT_NUMBERS,
        LogicalType::BigInteger,
        LogicalType::BigInteger,
    )?;
    // Real operands against a BigInteger pivot promote to BigDecimal;
    // a BigInteger result would truncate the fractional part.
    emit_operators(
        &mut methods,
        REAL_NUMBERS,
        LogicalType::BigInteger,
        LogicalType::BigDecimal,
    )?;

    Ok(methods)
}

/// Emit all comparison and arithmetic methods for one (candidate set, pivot,
/// output) invocation. Mirror methods are emitted iff candidate != pivot;
/// tags are fieldless, so `!=` is tag identity.
fn emit_operators(
    methods: &mut Vec<MethodDef>,
    candidates: &[LogicalType],
    pivot: LogicalType,
    output: LogicalType,
) -> GenResult<()> {
    for &candidate in candidates {
        for &op in BOOL_OP_ORDER {
            methods.push(comparison(op, pivot, candidate, output)?);
            if candidate != pivot {
                methods.push(comparison(op, candidate, pivot, output)?);
            }
        }
        for &op in BIGNUM_OP_ORDER {
            methods.push(arithmetic(op, pivot, candidate, output)?);
            if candidate != pivot {
                methods.push(arithmetic(op, candidate, pivot, output)?);
            }
        }
    }
    Ok(())
}

/// Comparison method: convert both operands, three-way compare against zero.
fn comparison(
    op: BoolOp,
    left: LogicalType,
    right: LogicalType,
    output: LogicalType,
) -> GenResult<MethodDef> {
    let body = format!(
        "({}).compareTo({}) {} 0",
        convert(output, "a", left)?,
        convert(output, "b", right)?,
        op.symbol()
    );
    Ok(MethodDef::new(
        "Boolean",
        op.method_name(),
        left,
        right,
        body,
    ))
}

/// Arithmetic method: convert both operands, invoke the named method.
fn arithmetic(
    op: ArithOp,
    left: LogicalType,
    right: LogicalType,
    output: LogicalType,
) -> GenResult<MethodDef> {
    let body = format!(
        "({}).{}({})",
        convert(output, "a", left)?,
        op.bignum_method(),
        convert(output, "b", right)?
    );
    Ok(MethodDef::new(
        output.name(),
        op.method_name(),
        left,
        right,
        body,
    ))
}

/// Convert an operand expression to the output type.
///
/// BigDecimal wraps everything but itself in a constructor. BigInteger
/// keeps BigInteger as is, truncates BigDecimal, and widens any other
/// operand through a 64-bit integer value.
pub(super) fn convert(output: LogicalType, expr: &str, ty: LogicalType) -> GenResult<String> {
    match output {
        LogicalType::BigDecimal => {
            if ty == LogicalType::BigDecimal {
                Ok(expr.to_string())
            } else {
                Ok(format!("new BigDecimal({})", expr))
            }
        }
        LogicalType::BigInteger => match ty {
            LogicalType::BigInteger => Ok(expr.to_string()),
            LogicalType::BigDecimal => Ok(format!("{}.toBigInteger()", expr)),
            _ => Ok(format!("BigInteger.valueOf({}.longValue())", expr)),
        },
        other => Err(GenError::NotBigNumber(other)),
    }
}
