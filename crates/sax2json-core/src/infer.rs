//! Literal type inference: raw text → typed leaf [`Node`].
//!
//! Inference runs an ordered chain of recognizers and the first match wins:
//!
//! 1. **Numeric**: optional sign, digits, at most one decimal point. With a
//!    point the value becomes a [`Node::Decimal`] whose scale is the number of
//!    digits after the point; without one it becomes a [`Node::Integer`].
//!    Both are arbitrary precision.
//! 2. **Boolean**: `true`/`false`, case-insensitive.
//! 3. **String**: everything else, verbatim.
//!
//! Inference never fails. Text that looks almost numeric (`1.`, `1e5`,
//! `1.2.3`, ` 7`) is simply a string.
//!
//! # Example
//! ```
//! use sax2json_core::{infer, Node};
//! assert_eq!(infer("42", true), Node::from(42_i64));
//! assert_eq!(infer("TRUE", true), Node::Boolean(true));
//! assert_eq!(infer("42", false), Node::from("42"));
//! ```

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::node::Node;

type Recognizer = fn(&str) -> Option<Node>;

/// Recognizers in priority order. The last one always matches.
const CHAIN: [Recognizer; 3] = [parse_numeric, parse_boolean, parse_string];

/// Convert `text` into a leaf node.
///
/// With `primitives` disabled the text is always returned as a string leaf,
/// untouched. The caller is responsible for any trimming.
pub fn infer(text: &str, primitives: bool) -> Node {
    if !primitives {
        return Node::String(text.to_owned());
    }
    CHAIN
        .iter()
        .find_map(|recognize| recognize(text))
        .unwrap_or_else(|| Node::String(text.to_owned()))
}

/// Integer or decimal literal. The decimal's scale comes straight from the
/// input, so no rescaling (and therefore no rounding) ever happens.
fn parse_numeric(text: &str) -> Option<Node> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => {
            // "1." is not a literal; ".5" is.
            if frac_part.is_empty() {
                return None;
            }
            (int_part, Some(frac_part))
        }
        None if body.is_empty() => return None,
        None => (body, None),
    };

    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }

    let mut digits = String::with_capacity(body.len());
    digits.push_str(int_part);
    digits.push_str(frac_part.unwrap_or_default());

    let mut unscaled = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    if negative {
        unscaled = -unscaled;
    }

    match frac_part {
        Some(frac) => Some(Node::Decimal(BigDecimal::new(unscaled, frac.len() as i64))),
        None => Some(Node::Integer(unscaled)),
    }
}

fn parse_boolean(text: &str) -> Option<Node> {
    if text.eq_ignore_ascii_case("true") {
        Some(Node::Boolean(true))
    } else if text.eq_ignore_ascii_case("false") {
        Some(Node::Boolean(false))
    } else {
        None
    }
}

fn parse_string(text: &str) -> Option<Node> {
    Some(Node::String(text.to_owned()))
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
