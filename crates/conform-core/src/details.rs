//! Structured failure records with key paths
//!
//! An [`ErrorDetails`] is created at the exact point of first failure with an
//! empty key path. Each enclosing recursive frame prepends its own key or index
//! with [`ErrorDetails::extend_key_path`] as the failure unwinds, so the final
//! path reads outermost first.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::value::{write_list, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation or coercion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Value is not an instance of the expected type
    WrongType,
    /// Fixed-length sequence has the wrong number of elements
    WrongLength,
    /// Map contains keys the schema does not declare
    UnexpectedKeys,
    /// Map lacks keys the schema requires
    MissingKeys,
    /// Predicate returned false
    PredicateFailed,
    /// Value is not one of the enumerated literals
    NotEnumMember,
    /// A conversion was attempted and failed
    CoercionFailed,
    /// Raised by a user-defined schema
    Custom,
}

/// One step of a key path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Value stored under a map key
    Key(Value),
    /// Element of a sequence
    Index(usize),
    /// The key itself of a generic map entry
    MapKey(Value),
    /// Element of a set
    Member(Value),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::MapKey(key) => write!(f, "key({})", key),
            PathSegment::Member(member) => write!(f, "{}", member),
        }
    }
}

/// Record of the first failure found while walking a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    failing_value: Value,
    reason: String,
    key_path: Vec<PathSegment>,
    kind: ErrorKind,
}

impl ErrorDetails {
    /// Create details for a failure at the root of a value
    pub fn new(failing_value: impl Into<Value>, reason: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Custom, failing_value, reason)
    }

    /// Create details with an explicit failure category
    pub fn with_kind(
        kind: ErrorKind,
        failing_value: impl Into<Value>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            failing_value: failing_value.into(),
            reason: reason.into(),
            key_path: Vec::new(),
            kind,
        }
    }

    pub(crate) fn wrong_type(value: &Value, expected: &str) -> Self {
        Self::with_kind(
            ErrorKind::WrongType,
            value.clone(),
            format!("is not of type {}", expected),
        )
    }

    pub(crate) fn wrong_length(value: &Value, expected: usize) -> Self {
        Self::with_kind(
            ErrorKind::WrongLength,
            value.clone(),
            format!("does not have {} elements", expected),
        )
    }

    pub(crate) fn unexpected_keys(value: &Value, keys: &[&Value]) -> Self {
        Self::with_kind(
            ErrorKind::UnexpectedKeys,
            value.clone(),
            format!("contains unexpected keys: {}", KeyList(keys)),
        )
    }

    pub(crate) fn missing_keys(value: &Value, keys: &[&Value]) -> Self {
        Self::with_kind(
            ErrorKind::MissingKeys,
            value.clone(),
            format!("is missing required keys: {}", KeyList(keys)),
        )
    }

    pub(crate) fn coercion_failed(value: &Value, target: &str) -> Self {
        Self::with_kind(
            ErrorKind::CoercionFailed,
            value.clone(),
            format!("could not be coerced to {}", target),
        )
    }

    /// The innermost value that failed
    pub fn failing_value(&self) -> &Value {
        &self.failing_value
    }

    /// Human-readable explanation, phrased to follow "the value"
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Keys and indices from the root down to the failing value
    pub fn key_path(&self) -> &[PathSegment] {
        &self.key_path
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return these details with `segment` prepended to the key path
    #[must_use]
    pub fn extend_key_path(mut self, segment: PathSegment) -> Self {
        self.key_path.insert(0, segment);
        self
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key_path.is_empty() {
            write!(f, "The root value {}: {}", self.reason, self.failing_value)
        } else {
            f.write_str("The value at [")?;
            write_list(f, &self.key_path)?;
            write!(f, "] {}: {}", self.reason, self.failing_value)
        }
    }
}

struct KeyList<'a>(&'a [&'a Value]);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_list(f, self.0)?;
        f.write_str("]")
    }
}
