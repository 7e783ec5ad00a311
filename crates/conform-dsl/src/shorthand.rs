//! Literal shorthand for common schema shapes
//!
//! Bare type tags, bare arrays of schemas, and bare key/schema lists stand in
//! for the longer constructor calls.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use conform_core::{MapField, Result, Schema, Value};

/// Bare-array shorthand
///
/// A single element schema means "any length, every element matches". Any
/// other count means "exactly these positions".
pub fn sequence(mut elements: Vec<Schema>) -> Schema {
    match elements.len() {
        1 => Schema::array_of(elements.remove(0)),
        _ => Schema::fixed_sequence(elements),
    }
}

/// Bare-map shorthand: every listed key is required
pub fn hash<I, K>(entries: I) -> Result<Schema>
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<Value>,
{
    Schema::fixed_map(
        entries
            .into_iter()
            .map(|(key, schema)| MapField::required(key, schema))
            .collect(),
    )
}

/// Bare-map shorthand with symbol keys
pub fn symbol_hash<'a, I>(entries: I) -> Result<Schema>
where
    I: IntoIterator<Item = (&'a str, Schema)>,
{
    hash(
        entries
            .into_iter()
            .map(|(name, schema)| (Value::symbol(name), schema)),
    )
}
