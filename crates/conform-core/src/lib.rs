//! Conform Core - recursive schema validation and coercion
//!
//! This crate checks whether an in-memory [`Value`] conforms to a declarative
//! [`Schema`], and coerces values of a close type into the exact shape a schema
//! expects. Every failure is reported as an [`ErrorDetails`] carrying the
//! failing value, a reason, and the key path from the root to the failure.
//!
//! # Main Components
//!
//! - **Value model**: [`Value`], a dynamically typed value with a total order
//! - **Schema variants**: [`Schema`] and the payload structs in [`schema`]
//! - **Error model**: [`ErrorDetails`] with functional key-path extension
//! - **Validation engine**: [`validation`], first-failure depth-first check
//! - **Coercion engine**: [`coercion`], conversion followed by structural check
//! - **Batch operations**: [`batch`], many values against one schema
//!
//! # Example
//!
//! ```rust
//! use conform_core::{coerce, validation_error, MapField, PathSegment, Schema, Value};
//!
//! let schema = Schema::fixed_map(vec![
//!     MapField::required(Value::symbol("floats"), Schema::array_of(Schema::float())),
//! ])
//! .unwrap();
//!
//! let value = Value::map([(
//!     Value::symbol("floats"),
//!     Value::array([Value::from(1.0), Value::from("wrong"), Value::from(3.0)]),
//! )]);
//!
//! let error = validation_error(&schema, &value).unwrap();
//! assert_eq!(error.failing_value(), &Value::from("wrong"));
//! assert_eq!(
//!     error.key_path(),
//!     &[PathSegment::Key(Value::symbol("floats")), PathSegment::Index(1)]
//! );
//!
//! let (coerced, error) = coerce(&Schema::integer(), &Value::from("5"));
//! assert_eq!(coerced, Value::from(5));
//! assert!(error.is_none());
//! ```
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod batch;
pub mod coercion;
pub mod details;
pub mod error;
pub mod schema;
pub mod validation;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use batch::{coerce_batch, validate_batch, ValidationConfig};
pub use details::{ErrorDetails, ErrorKind, PathSegment};
pub use error::{Error, Result, ValidationError, ValidationErrors};
pub use schema::{
    CustomSchema, EitherSchema, EnumSchema, FixedMapSchema, FixedSequenceSchema,
    GenericMapSchema, GenericSetSchema, MapField, MaybeSchema, PredicateSchema, Schema, TypeTag,
    VariableSequenceSchema,
};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check `value` against `schema`, returning the first failure if there is one
pub fn validation_error(schema: &Schema, value: &Value) -> Option<ErrorDetails> {
    schema.check(value).err()
}

/// Check `value` against `schema`, failing with a [`ValidationError`]
pub fn validate(schema: &Schema, value: &Value) -> std::result::Result<(), ValidationError> {
    schema.check(value).map_err(ValidationError::from)
}

/// Whether `value` conforms to `schema`
pub fn is_valid(schema: &Schema, value: &Value) -> bool {
    schema.check(value).is_ok()
}

/// Coerce `value` into the shape of `schema`
///
/// On success the coerced value is returned with no error. On failure the
/// original value is returned unchanged together with the failure details.
pub fn coerce(schema: &Schema, value: &Value) -> (Value, Option<ErrorDetails>) {
    match schema.convert(value) {
        Ok(converted) => (converted, None),
        Err(details) => (value.clone(), Some(details)),
    }
}

/// Coerce `value` into the shape of `schema`, failing with a [`ValidationError`]
pub fn try_coerce(schema: &Schema, value: &Value) -> std::result::Result<Value, ValidationError> {
    schema.convert(value).map_err(ValidationError::from)
}
