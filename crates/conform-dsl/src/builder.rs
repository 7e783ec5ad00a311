//! Builder for fixed-map schemas
//!
//! This module provides a fluent builder API for declaring the keys of a
//! fixed map, marking each one required or optional.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use conform_core::{MapField, Result, Schema, Value};

/// Builder for creating fixed-map schemas
#[derive(Debug, Clone, Default)]
pub struct HashSchemaBuilder {
    fields: Vec<MapField>,
}

impl HashSchemaBuilder {
    /// Create a builder with no declared keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a key that must be present
    pub fn required(mut self, key: impl Into<Value>, schema: Schema) -> Self {
        self.fields.push(MapField::required(key, schema));
        self
    }

    /// Declare a key that may be omitted
    pub fn optional(mut self, key: impl Into<Value>, schema: Schema) -> Self {
        self.fields.push(MapField::optional(key, schema));
        self
    }

    /// Declare a required symbol key
    pub fn required_sym(self, name: &str, schema: Schema) -> Self {
        self.required(Value::symbol(name), schema)
    }

    /// Declare an optional symbol key
    pub fn optional_sym(self, name: &str, schema: Schema) -> Self {
        self.optional(Value::symbol(name), schema)
    }

    /// Build the fixed-map schema, rejecting duplicate keys
    pub fn build(self) -> Result<Schema> {
        Schema::fixed_map(self.fields)
    }
}
