//! Primitive-pair method generation.
//!
//! For every ordered pair of primitive-like boxed types, emits one method
//! per arithmetic operator and one per comparison operator. Both operands
//! are cast to the working representation of whichever type wins the
//! promotion weight comparison.

use crate::method::MethodDef;
use crate::ops::{ARITH_OP_ORDER, BOOL_OP_ORDER};
use crate::types::{weight_of, LogicalType, PRIMITIVE_ORDER};
use crate::{GenError, GenResult};

/// Generate the primitive-pair section of the catalog.
pub(super) fn generate() -> GenResult<Vec<MethodDef>> {
    let mut methods = Vec::new();
    for (left, right) in ordered_pairs() {
        let winner = resolve_winner(left, right)?;
        let repr = winner
            .primitive_repr()
            .ok_or(GenError::NotPrimitive(winner))?;
        // char arithmetic promotes to int on the target platform, so the
        // boxed result of a char-typed operation is Integer.
        let arith_return = if repr == "char" {
            LogicalType::Integer
        } else {
            winner
        };
        for &op in ARITH_OP_ORDER {
            methods.push(MethodDef::new(
                arith_return.name(),
                op.method_name(),
                left,
                right,
                cast_infix_body(repr, op.symbol()),
            ));
        }
        for &op in BOOL_OP_ORDER {
            methods.push(MethodDef::new(
                "Boolean",
                op.method_name(),
                left,
                right,
                cast_infix_body(repr, op.symbol()),
            ));
        }
    }
    Ok(methods)
}

/// All ordered type pairs: the 2-combinations of [`PRIMITIVE_ORDER`] in
/// order, then the same combinations swapped, then every type paired with
/// itself.
pub(super) fn ordered_pairs() -> Vec<(LogicalType, LogicalType)> {
    let mut pairs = Vec::new();
    for (i, &left) in PRIMITIVE_ORDER.iter().enumerate() {
        for &right in &PRIMITIVE_ORDER[i + 1..] {
            pairs.push((left, right));
        }
    }
    let swapped: Vec<_> = pairs.iter().map(|&(left, right)| (right, left)).collect();
    pairs.extend(swapped);
    pairs.extend(PRIMITIVE_ORDER.iter().map(|&ty| (ty, ty)));
    pairs
}

/// Pick the pair's weight winner. The comparison is strict, so a self pair
/// resolves to the left operand.
fn resolve_winner(left: LogicalType, right: LogicalType) -> GenResult<LogicalType> {
    if weight_of(left)? < weight_of(right)? {
        Ok(right)
    } else {
        Ok(left)
    }
}

/// Body expression casting both operands to the working representation
fn cast_infix_body(repr: &str, symbol: &str) -> String {
    format!("(({}) a) {} (({}) b)", repr, symbol, repr)
}
