//! Coercion engine
//!
//! Walks a schema/value pair and converts values of a close type into the
//! exact shape the schema expects. Each variant first tries its well-known
//! conversions (see [`conversions`]); when none applies, the original value is
//! validated as-is, so already-conforming values pass through unchanged.
//!
//! The first uncoercible leaf aborts the whole walk. A failed coercion never
//! yields a partially built value.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

pub mod conversions;


use crate::details::{ErrorDetails, PathSegment};
use crate::schema::{
    EitherSchema, EnumSchema, FixedMapSchema, FixedSequenceSchema, GenericMapSchema,
    GenericSetSchema, MapField, Schema, TypeTag, VariableSequenceSchema,
};
use crate::validation::{validate_enum, validate_type, validate_value};
use crate::value::Value;
use conversions::{convert_to_boolean, convert_to_type, sequence_items, set_members, Conversion};
use std::collections::{BTreeMap, BTreeSet};

/// Coerce `value` into the shape described by `schema`
pub fn coerce_value(schema: &Schema, value: &Value) -> Result<Value, ErrorDetails> {
    match schema {
        Schema::Type(tag) => coerce_type(*tag, value),
        Schema::FixedSequence(schema) => coerce_fixed_sequence(schema, value),
        Schema::VariableSequence(schema) => coerce_variable_sequence(schema, value),
        Schema::FixedMap(schema) => coerce_fixed_map(schema, value),
        Schema::GenericMap(schema) => coerce_generic_map(schema, value),
        Schema::GenericSet(schema) => coerce_generic_set(schema, value),
        Schema::Enum(schema) => coerce_enum(schema, value),
        Schema::Either(schema) => coerce_either(schema, value),
        Schema::Maybe(schema) => match value {
            Value::Null => Ok(Value::Null),
            _ => coerce_value(schema.inner(), value),
        },
        Schema::Boolean => apply_conversion(convert_to_boolean(value), value, |candidate| {
            validate_value(&Schema::Boolean, candidate)
        }),
        Schema::Predicate(_) | Schema::Any => validate_value(schema, value).map(|()| value.clone()),
        Schema::Custom(schema) => schema.coerce(value),
    }
}

/// Validate a converted value, or the original one when no conversion applied
fn apply_conversion<F>(conversion: Conversion, original: &Value, validate: F) -> Result<Value, ErrorDetails>
where
    F: Fn(&Value) -> Result<(), ErrorDetails>,
{
    match conversion {
        Conversion::Converted(converted) => validate(&converted).map(|()| converted),
        Conversion::NotApplicable => validate(original).map(|()| original.clone()),
        Conversion::Failed(details) => Err(details),
    }
}

fn coerce_type(tag: TypeTag, value: &Value) -> Result<Value, ErrorDetails> {
    apply_conversion(convert_to_type(tag, value), value, |candidate| {
        validate_type(tag, candidate)
    })
}

fn coerce_fixed_sequence(schema: &FixedSequenceSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let Some(items) = sequence_items(value) else {
        return Err(ErrorDetails::wrong_type(value, "Array"));
    };
    let elements = schema.elements();
    if items.len() != elements.len() {
        return Err(ErrorDetails::wrong_length(value, elements.len()));
    }

    log::trace!("coercing fixed sequence of {} elements", items.len());
    elements
        .iter()
        .zip(items.iter())
        .enumerate()
        .map(|(index, (element, item))| {
            coerce_value(element, item).map_err(|e| e.extend_key_path(PathSegment::Index(index)))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn coerce_variable_sequence(
    schema: &VariableSequenceSchema,
    value: &Value,
) -> Result<Value, ErrorDetails> {
    let Some(items) = sequence_items(value) else {
        return Err(ErrorDetails::wrong_type(value, "Array"));
    };

    log::trace!("coercing sequence of {} elements", items.len());
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            coerce_value(schema.element(), item)
                .map_err(|e| e.extend_key_path(PathSegment::Index(index)))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn coerce_generic_set(schema: &GenericSetSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let Some(members) = set_members(value) else {
        return Err(ErrorDetails::wrong_type(value, "Set"));
    };

    log::trace!("coercing set of {} members", members.len());
    members
        .iter()
        .map(|member| {
            coerce_value(schema.element(), member)
                .map_err(|e| e.extend_key_path(PathSegment::Member(member.clone())))
        })
        .collect::<Result<BTreeSet<_>, _>>()
        .map(Value::Set)
}

/// Find the entry for a declared key, accepting a string spelling of it
///
/// An exact key match takes precedence over a textual one, and a spelling that
/// is itself a declared key is never borrowed by another field.
fn lookup_field<'a>(
    schema: &FixedMapSchema,
    entries: &'a BTreeMap<Value, Value>,
    key: &Value,
) -> Option<&'a Value> {
    if let Some(item) = entries.get(key) {
        return Some(item);
    }
    let spelling = Value::String(key.key_text()?.into_owned());
    if schema.declares(&spelling) {
        return None;
    }
    entries.get(&spelling)
}

/// Keys outside the declaration are dropped rather than reported
fn coerce_fixed_map(schema: &FixedMapSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let Value::Map(entries) = value else {
        return Err(ErrorDetails::wrong_type(value, "Map"));
    };

    let present: Vec<(&MapField, Option<&Value>)> = schema
        .fields()
        .iter()
        .map(|field| (field, lookup_field(schema, entries, field.key())))
        .collect();

    let missing: Vec<&Value> = present
        .iter()
        .filter(|(field, item)| field.is_required() && item.is_none())
        .map(|(field, _)| field.key())
        .collect();
    if !missing.is_empty() {
        return Err(ErrorDetails::missing_keys(value, &missing));
    }

    let kept = present.iter().filter(|(_, item)| item.is_some()).count();
    if kept < entries.len() {
        log::debug!("dropping {} undeclared keys during coercion", entries.len() - kept);
    }

    let mut coerced = BTreeMap::new();
    for (field, item) in present {
        if let Some(item) = item {
            let converted = coerce_value(field.schema(), item)
                .map_err(|e| e.extend_key_path(PathSegment::Key(field.key().clone())))?;
            coerced.insert(field.key().clone(), converted);
        }
    }
    Ok(Value::Map(coerced))
}

fn coerce_generic_map(schema: &GenericMapSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let Value::Map(entries) = value else {
        return Err(ErrorDetails::wrong_type(value, "Map"));
    };

    log::trace!("coercing generic map of {} entries", entries.len());
    let mut coerced = BTreeMap::new();
    for (key, item) in entries {
        let converted_key = coerce_value(schema.key_schema(), key)
            .map_err(|e| e.extend_key_path(PathSegment::MapKey(key.clone())))?;
        let converted_item = coerce_value(schema.value_schema(), item)
            .map_err(|e| e.extend_key_path(PathSegment::Key(key.clone())))?;
        coerced.insert(converted_key, converted_item);
    }
    Ok(Value::Map(coerced))
}

/// Membership is checked after coercing through the backing schema, if any
fn coerce_enum(schema: &EnumSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let Some(subschema) = schema.subschema() else {
        return validate_enum(schema, value).map(|()| value.clone());
    };
    let converted = coerce_value(subschema, value)?;
    validate_enum(schema, &converted).map(|()| converted)
}

/// First alternative that coerces cleanly wins; otherwise the last failure is reported
fn coerce_either(schema: &EitherSchema, value: &Value) -> Result<Value, ErrorDetails> {
    let mut last_failure = None;
    for (index, alternative) in schema.alternatives().iter().enumerate() {
        match coerce_value(alternative, value) {
            Ok(converted) => return Ok(converted),
            Err(details) => {
                log::debug!("either alternative {} ({}) could not coerce value: {}", index, alternative, details);
                last_failure = Some(details);
            }
        }
    }
    Err(last_failure.unwrap_or_else(|| ErrorDetails::coercion_failed(value, "any alternative")))
}
