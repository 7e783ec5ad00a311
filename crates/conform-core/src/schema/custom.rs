//! Extension point for user-defined schema variants
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::details::ErrorDetails;
use crate::value::Value;
use std::fmt;

/// Capability implemented by schema variants defined outside this crate
///
/// Implementations follow the same contract as the built-in variants: report
/// the first failure with an empty key path relative to `value`, and never
/// return a partially converted value from [`CustomSchema::coerce`].
pub trait CustomSchema: fmt::Debug + Send + Sync {
    /// Check `value` without converting it
    fn validate(&self, value: &Value) -> Result<(), ErrorDetails>;

    /// Convert `value` into the expected shape
    ///
    /// Defaults to validating the value as-is and passing it through.
    fn coerce(&self, value: &Value) -> Result<Value, ErrorDetails> {
        self.validate(value).map(|()| value.clone())
    }

    /// Short description used when displaying the enclosing schema
    fn describe(&self) -> String;
}
