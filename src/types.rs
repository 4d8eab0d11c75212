//! Logical numeric types and promotion tables.
//!
//! A [`LogicalType`] is a tag selecting rows in the static tables below; it
//! carries no payload, so equality between tags is identity. Every table is
//! an ordered const slice because the catalog's emission order follows table
//! iteration order exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GenError, GenResult};

/// Logical numeric type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalType {
    /// Boxed character
    Character,
    /// Boxed 32-bit integer
    Integer,
    /// Boxed 64-bit integer
    Long,
    /// Boxed double-precision float
    Double,
    /// Boxed single-precision float
    Float,
    /// Arbitrary-precision integer
    BigInteger,
    /// Arbitrary-precision decimal
    BigDecimal,
}

impl LogicalType {
    /// Boxed type name as it appears in generated signatures
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Character => "Character",
            LogicalType::Integer => "Integer",
            LogicalType::Long => "Long",
            LogicalType::Double => "Double",
            LogicalType::Float => "Float",
            LogicalType::BigInteger => "BigInteger",
            LogicalType::BigDecimal => "BigDecimal",
        }
    }

    /// Underlying scalar representation for primitive-like types.
    ///
    /// Arbitrary-precision types have no scalar representation and
    /// return `None`.
    pub fn primitive_repr(&self) -> Option<&'static str> {
        match self {
            LogicalType::Character => Some("char"),
            LogicalType::Integer => Some("int"),
            LogicalType::Long => Some("long"),
            LogicalType::Double => Some("double"),
            LogicalType::Float => Some("float"),
            LogicalType::BigInteger | LogicalType::BigDecimal => None,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Primitive-like types in enumeration order.
///
/// Double precedes Float here; the ordered-pair enumeration of the
/// primitive-pair phase depends on this order, not on the weight order.
pub const PRIMITIVE_ORDER: &[LogicalType] = &[
    LogicalType::Character,
    LogicalType::Integer,
    LogicalType::Long,
    LogicalType::Double,
    LogicalType::Float,
];

/// Promotion weight table. The heavier type of a pair wins the working
/// representation. Float ranks below Double but above Long; the ordering is
/// part of the catalog's contract, not an IEEE width order.
pub const WEIGHTS: &[(LogicalType, u32)] = &[
    (LogicalType::Character, 1),
    (LogicalType::Integer, 2),
    (LogicalType::Long, 3),
    (LogicalType::Float, 4),
    (LogicalType::Double, 5),
];

/// Look up a type's promotion weight.
pub fn weight_of(ty: LogicalType) -> GenResult<u32> {
    WEIGHTS
        .iter()
        .find(|(t, _)| *t == ty)
        .map(|(_, w)| *w)
        .ok_or(GenError::MissingWeight(ty))
}

/// Integral operand set for the arbitrary-precision phase
pub const INT_NUMBERS: &[LogicalType] = &[
    LogicalType::Integer,
    LogicalType::Long,
    LogicalType::BigInteger,
];

/// Real operand set for the arbitrary-precision phase
pub const REAL_NUMBERS: &[LogicalType] = &[LogicalType::Float, LogicalType::Double];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_repr() {
        assert_eq!(LogicalType::Character.primitive_repr(), Some("char"));
        assert_eq!(LogicalType::Integer.primitive_repr(), Some("int"));
        assert_eq!(LogicalType::Long.primitive_repr(), Some("long"));
        assert_eq!(LogicalType::Double.primitive_repr(), Some("double"));
        assert_eq!(LogicalType::Float.primitive_repr(), Some("float"));
        assert_eq!(LogicalType::BigInteger.primitive_repr(), None);
        assert_eq!(LogicalType::BigDecimal.primitive_repr(), None);
    }

    #[test]
    fn test_weight_order() {
        let weights: Vec<u32> = PRIMITIVE_ORDER
            .iter()
            .map(|&t| weight_of(t).unwrap())
            .collect();
        assert_eq!(weights, vec![1, 2, 3, 5, 4]);
    }

    #[test]
    fn test_weight_missing_for_bignum() {
        assert!(matches!(
            weight_of(LogicalType::BigDecimal),
            Err(GenError::MissingWeight(LogicalType::BigDecimal))
        ));
        assert!(matches!(
            weight_of(LogicalType::BigInteger),
            Err(GenError::MissingWeight(LogicalType::BigInteger))
        ));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(LogicalType::BigDecimal.to_string(), "BigDecimal");
        assert_eq!(LogicalType::Character.to_string(), "Character");
    }
}
