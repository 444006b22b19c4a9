//! External Entity Id Value Object
//!
//! Public-facing identifier exposed outside the service. Defaults to a
//! freshly generated v4 UUID; any value supplied by a caller must parse as
//! a UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_object::ValueObject;
use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::validation::result::{ValidationErrorDetails, ValidationResult};

/// Error raised for invalid external entity ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid id")]
pub struct InvalidExternalIdError {
    /// The offending raw id, when known.
    pub external_id: Option<String>,
    errors: Vec<ValidationErrorDetails>,
}

impl ValidationFailure for InvalidExternalIdError {
    fn message(&self) -> &str {
        "Invalid id"
    }

    fn details(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }
}

impl From<DomainValidationError> for InvalidExternalIdError {
    fn from(error: DomainValidationError) -> Self {
        Self {
            external_id: None,
            errors: error.into_errors(),
        }
    }
}

impl From<InvalidExternalIdError> for DomainValidationError {
    fn from(error: InvalidExternalIdError) -> Self {
        DomainValidationError::new(error.errors).with_message("Invalid id")
    }
}

/// A Value Object that identifies an entity towards the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalEntityId(String);

impl ExternalEntityId {
    /// Generate a fresh id. A v4 UUID always satisfies the rule set, so no
    /// fallible pipeline is involved.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an id from a caller-supplied value, with validation.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidExternalIdError> {
        Self(id.into()).validated()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ExternalEntityId {
    fn default() -> Self {
        Self::generate()
    }
}

impl ValueObject for ExternalEntityId {
    type Error = InvalidExternalIdError;

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if Uuid::parse_str(&self.0).is_err() {
            result.push(ValidationErrorDetails::field(
                "id",
                "ID must be a valid UUID.",
            ));
        }
        result
    }

    fn build_error(&self, result: ValidationResult) -> Self::Error {
        InvalidExternalIdError {
            external_id: Some(self.0.clone()),
            errors: result.into_errors(),
        }
    }
}

impl FromStr for ExternalEntityId {
    type Err = InvalidExternalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExternalEntityId::new(s)
    }
}

impl TryFrom<String> for ExternalEntityId {
    type Error = InvalidExternalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ExternalEntityId::new(value)
    }
}

impl From<ExternalEntityId> for String {
    fn from(id: ExternalEntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for ExternalEntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
