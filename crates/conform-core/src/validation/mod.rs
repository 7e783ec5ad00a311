//! Validation engine
//!
//! Walks a schema/value pair depth first and reports the first failure. For
//! composite variants every structural defect (wrong type, wrong length,
//! unexpected or missing keys) is reported before any element is visited;
//! among elements, the first one in iteration order wins. Nothing here
//! converts values, see [`crate::coercion`] for that.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::details::{ErrorDetails, ErrorKind, PathSegment};
use crate::schema::{
    EitherSchema, EnumSchema, FixedMapSchema, FixedSequenceSchema, GenericMapSchema,
    GenericSetSchema, PredicateSchema, Schema, TypeTag, VariableSequenceSchema,
};
use crate::value::Value;


/// Check `value` against `schema`, returning the first failure
pub fn validate_value(schema: &Schema, value: &Value) -> Result<(), ErrorDetails> {
    match schema {
        Schema::Type(tag) => validate_type(*tag, value),
        Schema::FixedSequence(schema) => validate_fixed_sequence(schema, value),
        Schema::VariableSequence(schema) => validate_variable_sequence(schema, value),
        Schema::FixedMap(schema) => validate_fixed_map(schema, value),
        Schema::GenericMap(schema) => validate_generic_map(schema, value),
        Schema::GenericSet(schema) => validate_generic_set(schema, value),
        Schema::Predicate(schema) => validate_predicate(schema, value),
        Schema::Enum(schema) => validate_enum(schema, value),
        Schema::Either(schema) => validate_either(schema, value),
        Schema::Maybe(schema) => match value {
            Value::Null => Ok(()),
            _ => validate_value(schema.inner(), value),
        },
        Schema::Boolean => match value {
            Value::Bool(_) => Ok(()),
            _ => Err(ErrorDetails::wrong_type(value, "Boolean")),
        },
        Schema::Any => Ok(()),
        Schema::Custom(schema) => schema.validate(value),
    }
}

pub(crate) fn validate_type(tag: TypeTag, value: &Value) -> Result<(), ErrorDetails> {
    if tag.matches(value) {
        Ok(())
    } else {
        Err(ErrorDetails::wrong_type(value, tag.name()))
    }
}

fn validate_fixed_sequence(
    schema: &FixedSequenceSchema,
    value: &Value,
) -> Result<(), ErrorDetails> {
    let Value::Array(items) = value else {
        return Err(ErrorDetails::wrong_type(value, "Array"));
    };
    let elements = schema.elements();
    if items.len() != elements.len() {
        return Err(ErrorDetails::wrong_length(value, elements.len()));
    }

    log::trace!("validating fixed sequence of {} elements", items.len());
    for (index, (element, item)) in elements.iter().zip(items).enumerate() {
        validate_value(element, item).map_err(|e| e.extend_key_path(PathSegment::Index(index)))?;
    }
    Ok(())
}

fn validate_variable_sequence(
    schema: &VariableSequenceSchema,
    value: &Value,
) -> Result<(), ErrorDetails> {
    let Value::Array(items) = value else {
        return Err(ErrorDetails::wrong_type(value, "Array"));
    };

    log::trace!("validating sequence of {} elements", items.len());
    for (index, item) in items.iter().enumerate() {
        validate_value(schema.element(), item)
            .map_err(|e| e.extend_key_path(PathSegment::Index(index)))?;
    }
    Ok(())
}

fn validate_fixed_map(schema: &FixedMapSchema, value: &Value) -> Result<(), ErrorDetails> {
    let Value::Map(entries) = value else {
        return Err(ErrorDetails::wrong_type(value, "Map"));
    };

    let unexpected: Vec<&Value> = entries.keys().filter(|key| !schema.declares(key)).collect();
    if !unexpected.is_empty() {
        return Err(ErrorDetails::unexpected_keys(value, &unexpected));
    }

    let missing: Vec<&Value> = schema
        .fields()
        .iter()
        .filter(|field| field.is_required() && !entries.contains_key(field.key()))
        .map(|field| field.key())
        .collect();
    if !missing.is_empty() {
        return Err(ErrorDetails::missing_keys(value, &missing));
    }

    log::trace!("validating fixed map with {} declared keys", schema.fields().len());
    for field in schema.fields() {
        if let Some(item) = entries.get(field.key()) {
            validate_value(field.schema(), item)
                .map_err(|e| e.extend_key_path(PathSegment::Key(field.key().clone())))?;
        }
    }
    Ok(())
}

fn validate_generic_map(schema: &GenericMapSchema, value: &Value) -> Result<(), ErrorDetails> {
    let Value::Map(entries) = value else {
        return Err(ErrorDetails::wrong_type(value, "Map"));
    };

    log::trace!("validating generic map of {} entries", entries.len());
    for (key, item) in entries {
        validate_value(schema.key_schema(), key)
            .map_err(|e| e.extend_key_path(PathSegment::MapKey(key.clone())))?;
        validate_value(schema.value_schema(), item)
            .map_err(|e| e.extend_key_path(PathSegment::Key(key.clone())))?;
    }
    Ok(())
}

fn validate_generic_set(schema: &GenericSetSchema, value: &Value) -> Result<(), ErrorDetails> {
    let Value::Set(members) = value else {
        return Err(ErrorDetails::wrong_type(value, "Set"));
    };

    log::trace!("validating set of {} members", members.len());
    for member in members {
        validate_value(schema.element(), member)
            .map_err(|e| e.extend_key_path(PathSegment::Member(member.clone())))?;
    }
    Ok(())
}

fn validate_predicate(schema: &PredicateSchema, value: &Value) -> Result<(), ErrorDetails> {
    if schema.test(value) {
        return Ok(());
    }
    let reason = match schema.name() {
        Some(name) => format!("does not satisfy predicate {:?}", name),
        None => "does not satisfy predicate".to_string(),
    };
    Err(ErrorDetails::with_kind(
        ErrorKind::PredicateFailed,
        value.clone(),
        reason,
    ))
}

pub(crate) fn validate_enum(schema: &EnumSchema, value: &Value) -> Result<(), ErrorDetails> {
    if schema.contains(value) {
        return Ok(());
    }
    Err(ErrorDetails::with_kind(
        ErrorKind::NotEnumMember,
        value.clone(),
        format!("is not a member of {}", Value::array(schema.members().to_vec())),
    ))
}

/// Alternatives are tried in order; when all fail, the last failure is reported
fn validate_either(schema: &EitherSchema, value: &Value) -> Result<(), ErrorDetails> {
    let mut last_failure = None;
    for (index, alternative) in schema.alternatives().iter().enumerate() {
        match validate_value(alternative, value) {
            Ok(()) => return Ok(()),
            Err(details) => {
                log::debug!("either alternative {} ({}) rejected value: {}", index, alternative, details);
                last_failure = Some(details);
            }
        }
    }
    Err(last_failure.unwrap_or_else(|| {
        ErrorDetails::with_kind(ErrorKind::WrongType, value.clone(), "matches no alternative")
    }))
}
