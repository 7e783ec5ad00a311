//! Error types for the Conform core library
//!
//! Failures found while walking a value are described by [`ErrorDetails`].
//! The raising entry points wrap those details in a [`ValidationError`], and
//! everything else that can go wrong (malformed schemas, bad configuration)
//! surfaces through the crate-wide [`Error`] enum.
//!
//! Copyright (c) 2025 Conform Team
//! Licensed under the Apache-2.0 license

use crate::details::ErrorDetails;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for Conform operations
#[derive(Error, Debug)]
pub enum Error {
    /// A value failed validation or coercion
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A schema was constructed in violation of its invariants
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Failure raised by the strict entry points, carrying one [`ErrorDetails`]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{details}")]
pub struct ValidationError {
    details: ErrorDetails,
}

impl ValidationError {
    pub fn new(details: ErrorDetails) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }

    pub fn into_details(self) -> ErrorDetails {
        self.details
    }
}

impl From<ErrorDetails> for ValidationError {
    fn from(details: ErrorDetails) -> Self {
        Self::new(details)
    }
}

/// Multiple validation errors collected during batch operations
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}
