//! JSON encoding and decoding of [`Node`] trees.
//!
//! Goes through `serde_json::Value` as the intermediate representation.
//! serde_json is built with `preserve_order` (object keys keep insertion
//! order) and `arbitrary_precision` (numbers are carried as their literal
//! text), so big integers and decimal scales survive unchanged:
//!
//! ```
//! use sax2json_core::{decode, encode};
//! let json = r#"{"price":10.90,"id":123456789012345678901234567890}"#;
//! let node = decode(json).unwrap();
//! assert_eq!(encode(&node).unwrap(), json);
//! ```

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use serde::de::Error as _;
use serde_json::{Map, Number, Value};

use crate::error::Result;
use crate::node::{Node, Object};

/// Encode a tree as compact JSON.
pub fn encode(node: &Node) -> Result<String> {
    Ok(serde_json::to_string(&to_value(node)?)?)
}

/// Encode a tree as pretty-printed JSON.
pub fn encode_pretty(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(node)?)?)
}

/// Decode JSON text into a tree. Numbers containing `.`, `e` or `E` become
/// decimals; all other numbers become integers.
pub fn decode(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Convert a tree into a `serde_json::Value`.
pub fn to_value(node: &Node) -> Result<Value> {
    Ok(match node {
        Node::Object(object) => {
            let mut map = Map::new();
            for (key, child) in object.iter() {
                map.insert(key.to_string(), to_value(child)?);
            }
            Value::Object(map)
        }
        Node::Array(items) => Value::Array(items.iter().map(to_value).collect::<Result<_>>()?),
        Node::String(s) => Value::String(s.clone()),
        Node::Integer(i) => Value::Number(number_literal(&i.to_string())?),
        Node::Decimal(d) => Value::Number(number_literal(&decimal_literal(d))?),
        Node::Boolean(b) => Value::Bool(*b),
        Node::Null => Value::Null,
    })
}

/// Convert a `serde_json::Value` into a tree.
pub fn from_value(value: &Value) -> Result<Node> {
    Ok(match value {
        Value::Object(map) => {
            let mut object = Object::new();
            for (key, child) in map {
                object.insert(key.as_str(), from_value(child)?);
            }
            Node::Object(object)
        }
        Value::Array(items) => Node::Array(items.iter().map(from_value).collect::<Result<_>>()?),
        Value::String(s) => Node::String(s.clone()),
        Value::Number(n) => number_node(&n.to_string())?,
        Value::Bool(b) => Node::Boolean(*b),
        Value::Null => Node::Null,
    })
}

/// Parse a numeric literal into a `Number` that keeps its exact text.
fn number_literal(literal: &str) -> Result<Number> {
    Ok(serde_json::from_str(literal)?)
}

fn number_node(literal: &str) -> Result<Node> {
    if literal.contains(['.', 'e', 'E']) {
        BigDecimal::from_str(literal)
            .map(Node::Decimal)
            .map_err(|err| serde_json::Error::custom(format!("invalid decimal {literal}: {err}")).into())
    } else {
        BigInt::from_str(literal)
            .map(Node::Integer)
            .map_err(|err| serde_json::Error::custom(format!("invalid integer {literal}: {err}")).into())
    }
}

/// Longest run of leading zeros written out in plain notation. Decimals
/// needing more switch to exponent form.
const MAX_PLAIN_ZEROS: usize = 1024;

/// Render a decimal keeping its scale. The output always contains a decimal
/// point or an exponent so it decodes back to a decimal.
///
/// Plain notation is used whenever its length stays proportional to the
/// digits; negative scales and very small magnitudes use exponent form
/// (`12E+3`, `5E-2000`) so the output never grows with the exponent.
fn decimal_literal(d: &BigDecimal) -> String {
    let (unscaled, scale) = d.as_bigint_and_exponent();
    if scale <= 0 {
        return format!("{unscaled}E+{}", -i128::from(scale));
    }

    let digits = unscaled.magnitude().to_string();
    let scale = match usize::try_from(scale) {
        Ok(scale) if scale < digits.len() + MAX_PLAIN_ZEROS => scale,
        _ => return format!("{unscaled}E-{scale}"),
    };

    let digits = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale - digits.len() + 1), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = digits.split_at(digits.len() - scale);
    let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}

impl fmt::Display for Node {
    /// Compact JSON, matching [`encode`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = encode(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
