//! Well-known conversions between close types
//!
//! Each conversion either produces a new value, declines because it does not
//! apply to the input, or fails outright (a parse error). Declined inputs are
//! validated as-is by the caller.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::details::ErrorDetails;
use crate::schema::TypeTag;
use crate::value::Value;
use std::borrow::Cow;

/// Outcome of attempting a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// A new value was produced
    Converted(Value),
    /// No conversion applies to this input
    NotApplicable,
    /// A conversion applies but the input could not be converted
    Failed(ErrorDetails),
}

/// Convert `value` toward the type named by `tag`
pub fn convert_to_type(tag: TypeTag, value: &Value) -> Conversion {
    match (tag, value) {
        (TypeTag::String, Value::Symbol(name)) => Conversion::Converted(Value::String(name.clone())),
        (TypeTag::Symbol, Value::String(text)) => Conversion::Converted(Value::Symbol(text.clone())),
        (TypeTag::Integer, Value::String(text)) => match text.parse::<i64>() {
            Ok(n) => Conversion::Converted(Value::Integer(n)),
            Err(_) => Conversion::Failed(ErrorDetails::coercion_failed(value, tag.name())),
        },
        (TypeTag::Float, Value::String(text)) => match text.parse::<f64>() {
            Ok(x) if x.is_finite() || is_numeric_literal(text) => {
                Conversion::Converted(Value::Float(x))
            }
            _ => Conversion::Failed(ErrorDetails::coercion_failed(value, tag.name())),
        },
        (TypeTag::Float, Value::Integer(n)) => Conversion::Converted(Value::Float(*n as f64)),
        (TypeTag::Array, Value::Set(members)) => {
            Conversion::Converted(Value::Array(members.iter().cloned().collect()))
        }
        (TypeTag::Set, Value::Array(items)) => {
            Conversion::Converted(Value::Set(items.iter().cloned().collect()))
        }
        _ => Conversion::NotApplicable,
    }
}

/// Digits, signs, decimal points and exponents only, so `NaN` and `inf` spellings are rejected
fn is_numeric_literal(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// Convert the literal strings `"true"` and `"false"` (case-sensitive)
pub fn convert_to_boolean(value: &Value) -> Conversion {
    match value.as_str() {
        Some("true") => Conversion::Converted(Value::Bool(true)),
        Some("false") => Conversion::Converted(Value::Bool(false)),
        _ => Conversion::NotApplicable,
    }
}

/// View an array, or a set in its sorted iteration order, as a sequence
pub fn sequence_items(value: &Value) -> Option<Cow<'_, [Value]>> {
    match value {
        Value::Array(items) => Some(Cow::Borrowed(items.as_slice())),
        Value::Set(members) => Some(Cow::Owned(members.iter().cloned().collect())),
        _ => None,
    }
}

/// View a set, or an array without its duplicates, as set members
pub fn set_members(value: &Value) -> Option<Cow<'_, std::collections::BTreeSet<Value>>> {
    match value {
        Value::Set(members) => Some(Cow::Borrowed(members)),
        Value::Array(items) => Some(Cow::Owned(items.iter().cloned().collect())),
        _ => None,
    }
}
