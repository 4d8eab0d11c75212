//! Operator tables for generated methods.
//!
//! Both phases share the comparison table; the arithmetic table has two
//! distinct iteration orders (the primitive phase interleaves divide before
//! times, the arbitrary-precision phase does the opposite), so each order is
//! its own const slice.

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Plus,
    Minus,
    Divide,
    Times,
    Modulo,
}

impl ArithOp {
    /// Generated method name
    pub fn method_name(&self) -> &'static str {
        match self {
            ArithOp::Plus => "plus",
            ArithOp::Minus => "minus",
            ArithOp::Divide => "divide",
            ArithOp::Times => "times",
            ArithOp::Modulo => "modulo",
        }
    }

    /// Infix symbol in the target language
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Plus => "+",
            ArithOp::Minus => "-",
            ArithOp::Divide => "/",
            ArithOp::Times => "*",
            ArithOp::Modulo => "%",
        }
    }

    /// Named method on the arbitrary-precision API
    pub fn bignum_method(&self) -> &'static str {
        match self {
            ArithOp::Plus => "add",
            ArithOp::Minus => "subtract",
            ArithOp::Times => "multiply",
            ArithOp::Divide => "divide",
            ArithOp::Modulo => "remainder",
        }
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    More,
    MoreOrEquals,
}

impl BoolOp {
    /// Generated method name
    pub fn method_name(&self) -> &'static str {
        match self {
            BoolOp::Equals => "equals",
            BoolOp::NotEquals => "notequals",
            BoolOp::Less => "less",
            BoolOp::LessOrEquals => "lessorequals",
            BoolOp::More => "more",
            BoolOp::MoreOrEquals => "moreorequals",
        }
    }

    /// Infix symbol in the target language
    pub fn symbol(&self) -> &'static str {
        match self {
            BoolOp::Equals => "==",
            BoolOp::NotEquals => "!=",
            BoolOp::Less => "<",
            BoolOp::LessOrEquals => "<=",
            BoolOp::More => ">",
            BoolOp::MoreOrEquals => ">=",
        }
    }
}

/// Arithmetic iteration order for the primitive-pair phase
pub const ARITH_OP_ORDER: &[ArithOp] = &[
    ArithOp::Plus,
    ArithOp::Minus,
    ArithOp::Divide,
    ArithOp::Times,
    ArithOp::Modulo,
];

/// Arithmetic iteration order for the arbitrary-precision phase.
/// Times precedes Divide here, unlike the primitive phase.
pub const BIGNUM_OP_ORDER: &[ArithOp] = &[
    ArithOp::Plus,
    ArithOp::Minus,
    ArithOp::Times,
    ArithOp::Divide,
    ArithOp::Modulo,
];

/// Comparison iteration order, shared by both phases
pub const BOOL_OP_ORDER: &[BoolOp] = &[
    BoolOp::Equals,
    BoolOp::NotEquals,
    BoolOp::Less,
    BoolOp::LessOrEquals,
    BoolOp::More,
    BoolOp::MoreOrEquals,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arith_symbols() {
        let symbols: Vec<&str> = ARITH_OP_ORDER.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "/", "*", "%"]);
    }

    #[test]
    fn test_bignum_methods() {
        let methods: Vec<&str> = BIGNUM_OP_ORDER.iter().map(|op| op.bignum_method()).collect();
        assert_eq!(
            methods,
            vec!["add", "subtract", "multiply", "divide", "remainder"]
        );
    }

    #[test]
    fn test_bool_symbols() {
        let symbols: Vec<&str> = BOOL_OP_ORDER.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["==", "!=", "<", "<=", ">", ">="]);
    }

    #[test]
    fn test_order_slices_cover_all_operators() {
        assert_eq!(ARITH_OP_ORDER.len(), 5);
        assert_eq!(BIGNUM_OP_ORDER.len(), 5);
        assert_eq!(BOOL_OP_ORDER.len(), 6);
        for op in ARITH_OP_ORDER {
            assert!(BIGNUM_OP_ORDER.contains(op));
        }
    }
}
