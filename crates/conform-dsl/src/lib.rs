//! Conform DSL - schema construction layer
//!
//! This crate builds [`conform_core::Schema`] values from concise calls. The
//! core engine never infers a schema from a raw value; everything that turns
//! shorthand into schema objects lives here.
//!
//! ## Features
//!
//! - **DSL trait**: [`Dsl`] with a default constructor for every variant
//! - **Custom DSLs**: implement [`Dsl`] on your own type and add methods
//! - **Fixed-map builder**: [`HashSchemaBuilder`] for required/optional keys
//! - **Shorthand**: [`shorthand::sequence`] and [`shorthand::hash`] for bare literals
//!
//! ## Quick Start
//!
//! ```rust
//! use conform_dsl::{schema, Dsl};
//! use conform_core::{coerce, Value};
//!
//! let schema = schema(|s| {
//!     s.hash()
//!         .required_sym("required", s.integer())
//!         .optional_sym("optional", s.either(vec![s.integer(), s.boolean()])?)
//!         .build()
//! })
//! .unwrap();
//!
//! let value = Value::map([
//!     (Value::from("required"), Value::from("1")),
//!     (Value::from("extra"), Value::from(3)),
//! ]);
//! let (coerced, error) = coerce(&schema, &value);
//! assert!(error.is_none());
//! assert_eq!(coerced, Value::map([(Value::symbol("required"), 1)]));
//! ```
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod dsl;
pub mod shorthand;

pub use builder::HashSchemaBuilder;
pub use dsl::{BaseDsl, Dsl};

use conform_core::{Result, Schema};

/// Build a schema with the built-in DSL
pub fn schema<F>(build: F) -> Result<Schema>
where
    F: FnOnce(&BaseDsl) -> Result<Schema>,
{
    schema_with(&BaseDsl, build)
}

/// Build a schema with a user-defined DSL
pub fn schema_with<D, F>(dsl: &D, build: F) -> Result<Schema>
where
    D: Dsl,
    F: FnOnce(&D) -> Result<Schema>,
{
    let schema = build(dsl)?;
    log::debug!("built schema {}", schema);
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_core::Error;

    #[test]
    fn test_schema_propagates_construction_errors() {
        let result = schema(|s| s.either(vec![s.string()]));
        assert!(matches!(result, Err(Error::InvalidSchema { .. })));
    }

    #[test]
    fn test_schema_returns_built_value() {
        let built = schema(|s| Ok(s.maybe(s.string()))).unwrap();
        assert_eq!(built.to_string(), "maybe(String)");
    }
}
