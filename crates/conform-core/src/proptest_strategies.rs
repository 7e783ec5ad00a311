//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random values,
//! including values known to conform to a given type tag.

#![cfg(test)]

use crate::schema::TypeTag;
use crate::value::Value;
use proptest::collection::{btree_map, btree_set, vec};
use proptest::prelude::*;

/// Strategy for generating symbol-like names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,10}"
}

/// Strategy for generating type tags
pub fn type_tag_strategy() -> impl Strategy<Value = TypeTag> {
    prop_oneof![
        Just(TypeTag::String),
        Just(TypeTag::Integer),
        Just(TypeTag::Float),
        Just(TypeTag::Symbol),
        Just(TypeTag::Array),
        Just(TypeTag::Set),
        Just(TypeTag::Map),
    ]
}

/// Strategy for generating scalar values
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
        name_strategy().prop_map(Value::Symbol),
    ]
}

/// Strategy for generating arbitrary values with controlled nesting
pub fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(
        3,  // max depth
        24, // max size
        4,  // items per collection
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..4).prop_map(Value::Array),
                btree_set(inner.clone(), 0..4).prop_map(Value::Set),
                btree_map(inner.clone(), inner, 0..4).prop_map(Value::Map),
            ]
        },
    )
}

/// Strategy for generating a value that is an instance of `tag`
pub fn instance_of(tag: TypeTag) -> BoxedStrategy<Value> {
    match tag {
        TypeTag::String => "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String).boxed(),
        TypeTag::Integer => any::<i64>().prop_map(Value::Integer).boxed(),
        TypeTag::Float => (-1.0e6f64..1.0e6).prop_map(Value::Float).boxed(),
        TypeTag::Symbol => name_strategy().prop_map(Value::Symbol).boxed(),
        TypeTag::Array => vec(scalar_strategy(), 0..4).prop_map(Value::Array).boxed(),
        TypeTag::Set => btree_set(scalar_strategy(), 0..4).prop_map(Value::Set).boxed(),
        TypeTag::Map => btree_map(scalar_strategy(), scalar_strategy(), 0..4)
            .prop_map(Value::Map)
            .boxed(),
    }
}
