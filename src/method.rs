//! Generated method definition records.

use serde::{Deserialize, Serialize};

use crate::types::LogicalType;

/// A single generated method definition.
///
/// Pure data: the record carries everything needed to render the method in
/// the target language, but no text formatting of its own. Parameters are
/// always `a` and `b` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Return type name as it appears in the signature
    pub return_type: String,
    /// Method name (`plus`, `equals`, ...)
    pub name: String,
    /// Type of parameter `a`
    pub left: LogicalType,
    /// Type of parameter `b`
    pub right: LogicalType,
    /// Body expression, without the `return` keyword or trailing `;`
    pub body: String,
}

impl MethodDef {
    /// Create a method definition record
    pub fn new(
        return_type: &str,
        name: &str,
        left: LogicalType,
        right: LogicalType,
        body: String,
    ) -> Self {
        Self {
            return_type: return_type.to_string(),
            name: name.to_string(),
            left,
            right,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_def_fields() {
        let method = MethodDef::new(
            "Long",
            "plus",
            LogicalType::Character,
            LogicalType::Long,
            "((long) a) + ((long) b)".to_string(),
        );
        assert_eq!(method.return_type, "Long");
        assert_eq!(method.name, "plus");
        assert_eq!(method.left, LogicalType::Character);
        assert_eq!(method.right, LogicalType::Long);
    }

    #[test]
    fn test_method_def_json_round_trip() {
        let method = MethodDef::new(
            "Boolean",
            "less",
            LogicalType::BigInteger,
            LogicalType::Integer,
            "(a).compareTo(BigInteger.valueOf(b.longValue())) < 0".to_string(),
        );
        let json = serde_json::to_string(&method).unwrap();
        let back: MethodDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, method);
    }
}
