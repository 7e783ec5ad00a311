//! Schema variant set
//!
//! A [`Schema`] is an immutable description of an expected value shape. The
//! built-in variants are matched directly by the validation and coercion
//! engines; [`Schema::Custom`] defers to a user-supplied [`CustomSchema`].
//!
//! Schemas are cheap to clone (children are reference counted) and are
//! `Send + Sync`, so one schema can be shared by any number of callers.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod custom;
pub mod types;

pub use custom::CustomSchema;
pub use types::{
    EitherSchema, EnumSchema, FixedMapSchema, FixedSequenceSchema, GenericMapSchema,
    GenericSetSchema, MapField, MaybeSchema, PredicateFn, PredicateSchema,
    VariableSequenceSchema,
};

use crate::details::ErrorDetails;
use crate::error::Result;
use crate::value::{write_list, Value};
use crate::{coercion, validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Primitive and bare-collection type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    String,
    Integer,
    Float,
    Symbol,
    /// Any array, elements unchecked
    Array,
    /// Any set, members unchecked
    Set,
    /// Any map, entries unchecked
    Map,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Integer => "Integer",
            TypeTag::Float => "Float",
            TypeTag::Symbol => "Symbol",
            TypeTag::Array => "Array",
            TypeTag::Set => "Set",
            TypeTag::Map => "Map",
        }
    }

    /// Whether `value` is an instance of this type
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (TypeTag::String, Value::String(_))
                | (TypeTag::Integer, Value::Integer(_))
                | (TypeTag::Float, Value::Float(_))
                | (TypeTag::Symbol, Value::Symbol(_))
                | (TypeTag::Array, Value::Array(_))
                | (TypeTag::Set, Value::Set(_))
                | (TypeTag::Map, Value::Map(_))
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Description of an expected value shape
#[derive(Debug, Clone)]
pub enum Schema {
    /// Exact instance of a primitive or bare collection type
    Type(TypeTag),
    /// Sequence with one schema per position
    FixedSequence(FixedSequenceSchema),
    /// Sequence of any length with one element schema
    VariableSequence(VariableSequenceSchema),
    /// Map with declared required and optional keys
    FixedMap(FixedMapSchema),
    /// Map of arbitrary keys with key and value schemas
    GenericMap(GenericMapSchema),
    /// Set with one member schema
    GenericSet(GenericSetSchema),
    /// Boolean test function
    Predicate(PredicateSchema),
    /// One of a set of literals
    Enum(EnumSchema),
    /// First matching alternative wins
    Either(EitherSchema),
    /// Null or the inner schema
    Maybe(MaybeSchema),
    /// Exactly `true` or `false`
    Boolean,
    /// Anything
    Any,
    /// User-defined variant
    Custom(Arc<dyn CustomSchema>),
}

impl Schema {
    pub fn string() -> Self {
        Schema::Type(TypeTag::String)
    }

    pub fn integer() -> Self {
        Schema::Type(TypeTag::Integer)
    }

    pub fn float() -> Self {
        Schema::Type(TypeTag::Float)
    }

    pub fn symbol() -> Self {
        Schema::Type(TypeTag::Symbol)
    }

    pub fn boolean() -> Self {
        Schema::Boolean
    }

    pub fn any() -> Self {
        Schema::Any
    }

    /// Sequence whose element at position `i` matches `elements[i]`
    pub fn fixed_sequence(elements: Vec<Schema>) -> Self {
        Schema::FixedSequence(FixedSequenceSchema::new(elements))
    }

    /// Sequence of any length whose elements all match `element`
    pub fn array_of(element: Schema) -> Self {
        Schema::VariableSequence(VariableSequenceSchema::new(element))
    }

    /// Map with exactly the declared keys
    pub fn fixed_map(fields: Vec<MapField>) -> Result<Self> {
        FixedMapSchema::new(fields).map(Schema::FixedMap)
    }

    pub fn hash_of(key: Schema, value: Schema) -> Self {
        Schema::GenericMap(GenericMapSchema::new(key, value))
    }

    pub fn set_of(element: Schema) -> Self {
        Schema::GenericSet(GenericSetSchema::new(element))
    }

    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::Predicate(PredicateSchema::new(test))
    }

    pub fn named_predicate<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::Predicate(PredicateSchema::named(name, test))
    }

    pub fn enumeration(members: Vec<Value>) -> Self {
        Schema::Enum(EnumSchema::new(members))
    }

    /// Enum whose raw values are first coerced through `subschema`
    pub fn enumeration_of(members: Vec<Value>, subschema: Schema) -> Self {
        Schema::Enum(EnumSchema::with_subschema(members, subschema))
    }

    /// Union of at least two alternatives
    pub fn either(alternatives: Vec<Schema>) -> Result<Self> {
        EitherSchema::new(alternatives).map(Schema::Either)
    }

    pub fn maybe(inner: Schema) -> Self {
        Schema::Maybe(MaybeSchema::new(inner))
    }

    pub fn custom(schema: impl CustomSchema + 'static) -> Self {
        Schema::Custom(Arc::new(schema))
    }

    /// Check `value` against this schema, reporting the first failure
    pub fn check(&self, value: &Value) -> std::result::Result<(), ErrorDetails> {
        validation::validate_value(self, value)
    }

    /// Coerce `value` into this schema's shape, reporting the first failure
    pub fn convert(&self, value: &Value) -> std::result::Result<Value, ErrorDetails> {
        coercion::coerce_value(self, value)
    }
}

impl From<TypeTag> for Schema {
    fn from(tag: TypeTag) -> Self {
        Schema::Type(tag)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Type(tag) => write!(f, "{}", tag),
            Schema::FixedSequence(schema) => {
                f.write_str("[")?;
                write_list(f, schema.elements())?;
                f.write_str("]")
            }
            Schema::VariableSequence(schema) => write!(f, "[{}]", schema.element()),
            Schema::FixedMap(schema) => {
                f.write_str("{")?;
                for (i, field) in schema.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let marker = if field.is_required() { "" } else { "?" };
                    write!(f, "{}{} => {}", field.key(), marker, field.schema())?;
                }
                f.write_str("}")
            }
            Schema::GenericMap(schema) => write!(
                f,
                "hash_of({} => {})",
                schema.key_schema(),
                schema.value_schema()
            ),
            Schema::GenericSet(schema) => write!(f, "set_of({})", schema.element()),
            Schema::Predicate(schema) => match schema.name() {
                Some(name) => write!(f, "predicate({:?})", name),
                None => f.write_str("predicate"),
            },
            Schema::Enum(schema) => {
                f.write_str("enum([")?;
                write_list(f, schema.members())?;
                f.write_str("]")?;
                if let Some(subschema) = schema.subschema() {
                    write!(f, ", {}", subschema)?;
                }
                f.write_str(")")
            }
            Schema::Either(schema) => {
                f.write_str("either(")?;
                write_list(f, schema.alternatives())?;
                f.write_str(")")
            }
            Schema::Maybe(schema) => write!(f, "maybe({})", schema.inner()),
            Schema::Boolean => f.write_str("boolean"),
            Schema::Any => f.write_str("any"),
            Schema::Custom(schema) => f.write_str(&schema.describe()),
        }
    }
}
