//! The schema DSL trait
//!
//! Every builder has a default implementation, so a user DSL only needs an
//! empty `impl Dsl for MyDsl {}` and can then add its own methods that
//! compose the built-in ones:
//!
//! ```rust
//! use conform_dsl::{schema_with, Dsl};
//! use conform_core::{is_valid, Schema, Value};
//!
//! struct Numbers;
//!
//! impl Dsl for Numbers {}
//!
//! impl Numbers {
//!     fn even_integer(&self) -> Schema {
//!         self.named_predicate("even", |v| v.as_i64().is_some_and(|n| n % 2 == 0))
//!     }
//! }
//!
//! let schema = schema_with(&Numbers, |s| Ok(s.even_integer())).unwrap();
//! assert!(is_valid(&schema, &Value::from(6)));
//! assert!(!is_valid(&schema, &Value::from(7)));
//! ```
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::builder::HashSchemaBuilder;
use conform_core::{CustomSchema, Error, Result, Schema, TypeTag, Value};
use regex::Regex;

/// Concise constructors for every schema variant
pub trait Dsl {
    fn string(&self) -> Schema {
        Schema::string()
    }

    fn integer(&self) -> Schema {
        Schema::integer()
    }

    fn float(&self) -> Schema {
        Schema::float()
    }

    fn symbol(&self) -> Schema {
        Schema::symbol()
    }

    fn boolean(&self) -> Schema {
        Schema::boolean()
    }

    fn any(&self) -> Schema {
        Schema::any()
    }

    /// Any array, elements unchecked
    fn array(&self) -> Schema {
        Schema::Type(TypeTag::Array)
    }

    /// Any set, members unchecked
    fn set(&self) -> Schema {
        Schema::Type(TypeTag::Set)
    }

    /// Any map, entries unchecked
    fn map(&self) -> Schema {
        Schema::Type(TypeTag::Map)
    }

    fn array_of(&self, element: Schema) -> Schema {
        Schema::array_of(element)
    }

    /// Fixed-length sequence, one schema per position
    fn tuple(&self, elements: Vec<Schema>) -> Schema {
        Schema::fixed_sequence(elements)
    }

    fn set_of(&self, element: Schema) -> Schema {
        Schema::set_of(element)
    }

    fn hash_of(&self, key: Schema, value: Schema) -> Schema {
        Schema::hash_of(key, value)
    }

    /// Start a fixed map with required and optional keys
    fn hash(&self) -> HashSchemaBuilder {
        HashSchemaBuilder::new()
    }

    fn predicate<F>(&self, test: F) -> Schema
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::predicate(test)
    }

    fn named_predicate<F>(&self, name: impl Into<String>, test: F) -> Schema
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::named_predicate(name, test)
    }

    fn enumeration(&self, members: Vec<Value>) -> Schema {
        Schema::enumeration(members)
    }

    fn enumeration_of(&self, members: Vec<Value>, subschema: Schema) -> Schema {
        Schema::enumeration_of(members, subschema)
    }

    /// Fails unless given at least two alternatives
    fn either(&self, alternatives: Vec<Schema>) -> Result<Schema> {
        Schema::either(alternatives)
    }

    fn maybe(&self, inner: Schema) -> Schema {
        Schema::maybe(inner)
    }

    /// Register a user-defined variant
    fn custom(&self, schema: impl CustomSchema + 'static) -> Schema {
        Schema::custom(schema)
    }

    /// Strings matching a regular expression
    fn matches(&self, pattern: &str) -> Result<Schema> {
        let regex = Regex::new(pattern).map_err(|e| Error::InvalidSchema {
            message: format!("invalid pattern {:?}: {}", pattern, e),
        })?;
        Ok(Schema::named_predicate(
            format!("matches /{}/", pattern),
            move |value| value.as_str().is_some_and(|text| regex.is_match(text)),
        ))
    }
}

/// The DSL with only the built-in constructors
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseDsl;

impl Dsl for BaseDsl {}
