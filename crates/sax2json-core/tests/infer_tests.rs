/// Literal type inference: integer → decimal → boolean → string.
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use sax2json_core::{infer, Node};
use std::str::FromStr;

fn integer(s: &str) -> Node {
    Node::Integer(BigInt::from_str(s).unwrap())
}

fn decimal(unscaled: i64, scale: i64) -> Node {
    Node::Decimal(BigDecimal::new(BigInt::from(unscaled), scale))
}

/// The scale of a decimal node, i.e. digits after the point.
fn scale_of(node: &Node) -> i64 {
    node.as_decimal().expect("expected a decimal").as_bigint_and_exponent().1
}

// ============================================================================
// Numeric
// ============================================================================

#[test]
fn integer_literal() {
    assert_eq!(infer("12345", true), integer("12345"));
}

#[test]
fn negative_integer_literal() {
    assert_eq!(infer("-42", true), integer("-42"));
}

#[test]
fn plus_signed_integer_literal() {
    assert_eq!(infer("+42", true), integer("42"));
}

#[test]
fn leading_zeros_are_still_an_integer() {
    assert_eq!(infer("007", true), integer("7"));
}

#[test]
fn integer_beyond_i64_keeps_every_digit() {
    let big = "123456789012345678901234567890123456789";
    assert_eq!(infer(big, true), integer(big));
}

#[test]
fn decimal_literal_keeps_scale() {
    let node = infer("10.90", true);
    assert_eq!(node, decimal(1090, 2));
    assert_eq!(scale_of(&node), 2);
}

#[test]
fn decimal_with_single_fraction_digit() {
    let node = infer("12345.6", true);
    assert!(node.as_decimal().is_some());
    assert_eq!(scale_of(&node), 1);
}

#[test]
fn negative_decimal() {
    assert_eq!(infer("-0.25", true), decimal(-25, 2));
}

#[test]
fn decimal_without_integer_part() {
    let node = infer(".5", true);
    assert_eq!(node, decimal(5, 1));
    assert_eq!(scale_of(&node), 1);
}

#[test]
fn trailing_zero_scale_is_preserved() {
    assert_eq!(scale_of(&infer("1.000", true)), 3);
}

#[test]
fn trailing_point_is_a_string() {
    assert_eq!(infer("1.", true), Node::from("1."));
}

#[test]
fn two_points_is_a_string() {
    assert_eq!(infer("1.2.3", true), Node::from("1.2.3"));
}

#[test]
fn exponent_is_a_string() {
    assert_eq!(infer("1e5", true), Node::from("1e5"));
}

#[test]
fn bare_sign_is_a_string() {
    assert_eq!(infer("-", true), Node::from("-"));
    assert_eq!(infer("+", true), Node::from("+"));
}

#[test]
fn bare_point_is_a_string() {
    assert_eq!(infer(".", true), Node::from("."));
}

#[test]
fn untrimmed_number_is_a_string() {
    assert_eq!(infer(" 7", true), Node::from(" 7"));
}

#[test]
fn hex_is_a_string() {
    assert_eq!(infer("0x1F", true), Node::from("0x1F"));
}

// ============================================================================
// Boolean
// ============================================================================

#[test]
fn boolean_true() {
    assert_eq!(infer("true", true), Node::Boolean(true));
}

#[test]
fn boolean_false() {
    assert_eq!(infer("false", true), Node::Boolean(false));
}

#[test]
fn boolean_is_case_insensitive() {
    assert_eq!(infer("TRUE", true), Node::Boolean(true));
    assert_eq!(infer("False", true), Node::Boolean(false));
}

#[test]
fn yes_is_not_a_boolean() {
    assert_eq!(infer("yes", true), Node::from("yes"));
}

// ============================================================================
// String fallback and disabled inference
// ============================================================================

#[test]
fn plain_text_is_a_string() {
    assert_eq!(infer("hello", true), Node::from("hello"));
}

#[test]
fn empty_text_is_an_empty_string() {
    assert_eq!(infer("", true), Node::from(""));
}

#[test]
fn null_word_is_a_string() {
    assert_eq!(infer("null", true), Node::from("null"));
}

#[test]
fn disabled_inference_keeps_numbers_as_strings() {
    assert_eq!(infer("10.90", false), Node::from("10.90"));
    assert_eq!(infer("1985", false), Node::from("1985"));
}

#[test]
fn disabled_inference_keeps_booleans_as_strings() {
    assert_eq!(infer("true", false), Node::from("true"));
}

#[test]
fn disabled_inference_does_not_trim() {
    assert_eq!(infer("  padded ", false), Node::from("  padded "));
}
