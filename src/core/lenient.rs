//! Permissive numeric coercion for loosely-typed client payloads.
//!
//! Order items and bill adjustments arrive from several frontends that disagree on
//! whether numbers are sent as JSON numbers or strings. Anything that cannot be read as a
//! number degrades to "absent" instead of failing the whole request.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Largest magnitude accepted from a payload (one quadrillion). Anything beyond is not a
/// plausible price, quantity or percentage and is treated like an unparsable value.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000_000_000;

/// Read a JSON value as a decimal.
///
/// Accepts numbers and numeric strings (including scientific notation). Returns `None` for
/// null, booleans, arrays, objects, unparsable strings and values beyond `MAX_MAGNITUDE`.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }?;

    if parsed.abs() > Decimal::from(MAX_MAGNITUDE) {
        return None;
    }
    Some(parsed)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// serde helper: any value that does not coerce becomes zero
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_decimal).unwrap_or(Decimal::ZERO))
}

/// serde helper: any value that does not coerce becomes `None`
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_decimal))
}
