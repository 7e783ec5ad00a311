//! Immutable payloads of the composite schema variants
//!
//! Every struct here is frozen after construction: fields are private, children
//! are reference counted, and only read accessors are exposed. Constructors that
//! can break an invariant return [`crate::Result`].
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use super::Schema;
use crate::error::{Error, Result};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Boolean test applied by a predicate schema
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Sequence of exactly `elements.len()` items, each matching its positional schema
#[derive(Debug, Clone)]
pub struct FixedSequenceSchema {
    elements: Arc<[Schema]>,
}

impl FixedSequenceSchema {
    pub fn new(elements: Vec<Schema>) -> Self {
        Self {
            elements: elements.into(),
        }
    }

    pub fn elements(&self) -> &[Schema] {
        &self.elements
    }
}

/// Sequence of any length whose items all match one schema
#[derive(Debug, Clone)]
pub struct VariableSequenceSchema {
    element: Arc<Schema>,
}

impl VariableSequenceSchema {
    pub fn new(element: Schema) -> Self {
        Self {
            element: Arc::new(element),
        }
    }

    pub fn element(&self) -> &Schema {
        &self.element
    }
}

/// Declared key of a fixed map
#[derive(Debug, Clone)]
pub struct MapField {
    key: Value,
    schema: Schema,
    required: bool,
}

impl MapField {
    /// A key that must be present
    pub fn required(key: impl Into<Value>, schema: Schema) -> Self {
        Self {
            key: key.into(),
            schema,
            required: true,
        }
    }

    /// A key that may be omitted
    pub fn optional(key: impl Into<Value>, schema: Schema) -> Self {
        Self {
            key: key.into(),
            schema,
            required: false,
        }
    }

    pub fn key(&self) -> &Value {
        &self.key
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Map with a closed set of declared keys
#[derive(Debug, Clone)]
pub struct FixedMapSchema {
    fields: Arc<[MapField]>,
}

impl FixedMapSchema {
    /// Fields keep their declaration order; duplicate keys are rejected
    pub fn new(fields: Vec<MapField>) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|earlier| earlier.key == field.key) {
                return Err(Error::invalid_schema(format!(
                    "key {} is declared more than once",
                    field.key
                )));
            }
        }
        Ok(Self {
            fields: fields.into(),
        })
    }

    pub fn fields(&self) -> &[MapField] {
        &self.fields
    }

    pub fn field(&self, key: &Value) -> Option<&MapField> {
        self.fields.iter().find(|field| field.key == *key)
    }

    pub fn declares(&self, key: &Value) -> bool {
        self.field(key).is_some()
    }
}

/// Map of arbitrary keys where every key and every value match a schema
#[derive(Debug, Clone)]
pub struct GenericMapSchema {
    key: Arc<Schema>,
    value: Arc<Schema>,
}

impl GenericMapSchema {
    pub fn new(key: Schema, value: Schema) -> Self {
        Self {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }

    pub fn key_schema(&self) -> &Schema {
        &self.key
    }

    pub fn value_schema(&self) -> &Schema {
        &self.value
    }
}

/// Set whose members all match one schema
#[derive(Debug, Clone)]
pub struct GenericSetSchema {
    element: Arc<Schema>,
}

impl GenericSetSchema {
    pub fn new(element: Schema) -> Self {
        Self {
            element: Arc::new(element),
        }
    }

    pub fn element(&self) -> &Schema {
        &self.element
    }
}

/// Arbitrary boolean test over a value
#[derive(Clone)]
pub struct PredicateSchema {
    name: Option<String>,
    test: Arc<PredicateFn>,
}

impl PredicateSchema {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            test: Arc::new(test),
        }
    }

    pub fn named<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for PredicateSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Closed set of literal values, optionally reached through a backing schema
#[derive(Debug, Clone)]
pub struct EnumSchema {
    members: Arc<[Value]>,
    subschema: Option<Arc<Schema>>,
}

impl EnumSchema {
    pub fn new(members: Vec<Value>) -> Self {
        Self {
            members: members.into(),
            subschema: None,
        }
    }

    /// Members reached by first coercing through `subschema`
    pub fn with_subschema(members: Vec<Value>, subschema: Schema) -> Self {
        Self {
            members: members.into(),
            subschema: Some(Arc::new(subschema)),
        }
    }

    /// Members in declaration order
    pub fn members(&self) -> &[Value] {
        &self.members
    }

    pub fn subschema(&self) -> Option<&Schema> {
        self.subschema.as_deref()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.members.contains(value)
    }
}

/// Union of two or more alternatives, tried in order
#[derive(Debug, Clone)]
pub struct EitherSchema {
    alternatives: Arc<[Schema]>,
}

impl EitherSchema {
    pub fn new(alternatives: Vec<Schema>) -> Result<Self> {
        if alternatives.len() < 2 {
            return Err(Error::invalid_schema(format!(
                "either needs at least two alternatives, got {}",
                alternatives.len()
            )));
        }
        Ok(Self {
            alternatives: alternatives.into(),
        })
    }

    pub fn alternatives(&self) -> &[Schema] {
        &self.alternatives
    }
}

/// Null, or a value matching the inner schema
#[derive(Debug, Clone)]
pub struct MaybeSchema {
    inner: Arc<Schema>,
}

impl MaybeSchema {
    pub fn new(inner: Schema) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn inner(&self) -> &Schema {
        &self.inner
    }
}
