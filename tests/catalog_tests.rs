//! Integration tests for the full method catalog.
//!
//! These tests exercise the public crate surface end to end:
//! generate → render, section ordering, and the JSON dump.

use pretty_assertions::assert_eq;

use arith_codegen::codegen::SECTION_SEPARATOR;
use arith_codegen::types::{weight_of, INT_NUMBERS, REAL_NUMBERS};
use arith_codegen::{generate_catalog, render_catalog, Catalog, GenError, LogicalType};

#[test]
fn test_catalog_totals() {
    let catalog = generate_catalog().unwrap();
    assert_eq!(catalog.primitive_methods.len(), 275);
    assert_eq!(catalog.bignum_methods.len(), 220);
}

#[test]
fn test_rendered_catalog_shape() {
    let catalog = generate_catalog().unwrap();
    let rendered = render_catalog(&catalog);

    // Every method renders as four lines (signature, body, brace, blank);
    // the separator adds one more
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 495 * 4 + 1);
    assert_eq!(lines[1100], SECTION_SEPARATOR);
    assert!(rendered.ends_with("\n\n"));

    // The first group is (Character, Integer): int wins, so arithmetic
    // returns Integer
    assert!(rendered.starts_with(
        "  public static Integer plus(Character a, Integer b) {\n    return ((int) a) + ((int) b);\n  }\n\n"
    ));
}

#[test]
fn test_catalog_scenario_methods() {
    let catalog = generate_catalog().unwrap();
    let rendered = render_catalog(&catalog);

    assert!(rendered.contains(
        "  public static Long plus(Character a, Long b) {\n    return ((long) a) + ((long) b);\n  }\n"
    ));
    assert!(rendered.contains(
        "  public static Integer plus(Character a, Character b) {\n    return ((char) a) + ((char) b);\n  }\n"
    ));
    assert!(rendered.contains(
        "  public static Boolean less(BigInteger a, Integer b) {\n    return (a).compareTo(BigInteger.valueOf(b.longValue())) < 0;\n  }\n"
    ));
    assert!(rendered.contains(
        "  public static Boolean less(Integer a, BigInteger b) {\n    return (BigInteger.valueOf(a.longValue())).compareTo(b) < 0;\n  }\n"
    ));
    // BigDecimal→BigInteger conversion truncates rather than rounds
    assert!(rendered.contains("a.toBigInteger()"));
    assert!(!rendered.contains("toBigIntegerExact"));
}

#[test]
fn test_domain_sets() {
    assert_eq!(
        INT_NUMBERS.to_vec(),
        vec![
            LogicalType::Integer,
            LogicalType::Long,
            LogicalType::BigInteger,
        ]
    );
    assert_eq!(
        REAL_NUMBERS.to_vec(),
        vec![LogicalType::Float, LogicalType::Double]
    );
}

#[test]
fn test_missing_weight_is_an_error() {
    // The arbitrary-precision types have no promotion weight; a lookup is
    // the static-defect class that aborts generation
    let err = weight_of(LogicalType::BigInteger).unwrap_err();
    assert!(matches!(err, GenError::MissingWeight(LogicalType::BigInteger)));
    assert_eq!(
        err.to_string(),
        "No promotion weight for type: BigInteger"
    );
}

#[test]
fn test_catalog_json_round_trip() {
    let catalog = generate_catalog().unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let back: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, catalog);
}

#[test]
fn test_renders_are_reproducible() {
    let first = render_catalog(&generate_catalog().unwrap());
    let second = render_catalog(&generate_catalog().unwrap());
    assert_eq!(first, second);
}
