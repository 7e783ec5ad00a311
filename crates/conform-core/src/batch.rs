//! Batch validation and coercion over many values
//!
//! Each failing value's error has its position in the batch prepended to the
//! key path, so a report reads the same way as one for a single array.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::details::{ErrorDetails, PathSegment};
use crate::error::{Error, Result, ValidationError, ValidationErrors};
use crate::schema::Schema;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Validation configuration for batch operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Configuration {
            message: format!("Failed to parse validation config: {}", e),
            source: Some(e),
        })
    }

    fn should_stop(&self, errors: &ValidationErrors) -> bool {
        if self.fail_fast {
            return true;
        }
        self.max_errors > 0 && errors.len() >= self.max_errors
    }
}

fn batch_error(index: usize, details: ErrorDetails) -> ValidationError {
    ValidationError::new(details.extend_key_path(PathSegment::Index(index)))
}

/// Validate every value in `values` against `schema`
pub fn validate_batch(
    schema: &Schema,
    values: &[Value],
    config: &ValidationConfig,
) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for (i, value) in values.iter().enumerate() {
        match schema.check(value) {
            Ok(()) => continue,
            Err(details) => {
                log::debug!("batch item {} failed validation: {}", i, details);
                errors.add(batch_error(i, details));

                if config.should_stop(&errors) {
                    log::warn!("stopping batch validation after {} of {} values", i + 1, values.len());
                    break;
                }
            }
        }
    }

    errors.into_result()
}

/// Coerce every value in `values`, returning all coerced values only if none failed
pub fn coerce_batch(
    schema: &Schema,
    values: &[Value],
    config: &ValidationConfig,
) -> std::result::Result<Vec<Value>, ValidationErrors> {
    let mut coerced = Vec::with_capacity(values.len());
    let mut errors = ValidationErrors::new();

    for (i, value) in values.iter().enumerate() {
        match schema.convert(value) {
            Ok(converted) => coerced.push(converted),
            Err(details) => {
                log::debug!("batch item {} failed coercion: {}", i, details);
                errors.add(batch_error(i, details));

                if config.should_stop(&errors) {
                    log::warn!("stopping batch coercion after {} of {} values", i + 1, values.len());
                    break;
                }
            }
        }
    }

    errors.into_result().map(|()| coerced)
}
