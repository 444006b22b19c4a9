//! Unique Entity Id Value Object
//!
//! Internal, persistence-facing identifier. The backing document store
//! addresses records by object id (24 lowercase hex characters), so that is
//! the format enforced here. Nothing outside the persistence boundary should
//! ever mint one of these; public identity is [`ExternalEntityId`].
//!
//! [`ExternalEntityId`]: crate::value_object::external_entity_id::ExternalEntityId

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_object::ValueObject;
use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::validation::result::{ValidationErrorDetails, ValidationResult};
use crate::validation::validator::Validator;

/// Object id length imposed by the backing store.
const OBJECT_ID_LENGTH: usize = 24;

/// Error raised for invalid unique entity ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid id")]
pub struct InvalidUniqueEntityIdError {
    /// The offending raw id, when known.
    pub entity_id: Option<String>,
    errors: Vec<ValidationErrorDetails>,
}

impl ValidationFailure for InvalidUniqueEntityIdError {
    fn message(&self) -> &str {
        "Invalid id"
    }

    fn details(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }
}

impl From<DomainValidationError> for InvalidUniqueEntityIdError {
    fn from(error: DomainValidationError) -> Self {
        Self {
            entity_id: None,
            errors: error.into_errors(),
        }
    }
}

impl From<InvalidUniqueEntityIdError> for DomainValidationError {
    fn from(error: InvalidUniqueEntityIdError) -> Self {
        DomainValidationError::new(error.errors).with_message("Invalid id")
    }
}

/// Rule set for unique entity id candidates.
pub struct UniqueEntityIdValidator;

impl Validator for UniqueEntityIdValidator {
    type Candidate = str;

    fn validate(&self, candidate: &str) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if candidate.is_empty() {
            result.push(ValidationErrorDetails::field(
                "id",
                "The id must not be empty.",
            ));
            return result;
        }
        let well_formed = candidate.len() == OBJECT_ID_LENGTH
            && candidate
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !well_formed {
            result.push(ValidationErrorDetails::field(
                "id",
                "The id must be a 24 character hex string.",
            ));
        }
        result
    }
}

/// A Value Object that uniquely identifies an entity in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId(String);

impl UniqueEntityId {
    /// Create a new id with validation.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidUniqueEntityIdError> {
        Self(id.into()).validated()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for UniqueEntityId {
    type Error = InvalidUniqueEntityIdError;

    fn validate(&self) -> ValidationResult {
        UniqueEntityIdValidator.validate(&self.0)
    }

    fn build_error(&self, result: ValidationResult) -> Self::Error {
        InvalidUniqueEntityIdError {
            entity_id: Some(self.0.clone()),
            errors: result.into_errors(),
        }
    }
}

impl FromStr for UniqueEntityId {
    type Err = InvalidUniqueEntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UniqueEntityId::new(s)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = InvalidUniqueEntityIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UniqueEntityId::new(value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(id: UniqueEntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for UniqueEntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "652f1e9b2c4d8a3f7b1e9c0d";

    #[test]
    fn test_valid_object_id() {
        let id = UniqueEntityId::new(VALID).unwrap();
        assert_eq!(id.as_str(), VALID);
    }

    #[test]
    fn test_invalid_format_raises_specific_error() {
        let error = UniqueEntityId::new("not-a-uuid").unwrap_err();
        assert_eq!(error.entity_id.as_deref(), Some("not-a-uuid"));
        assert_eq!(error.details().len(), 1);
        assert_eq!(error.details()[0].path(), "id");
        assert!(error.details()[0].msg().contains("hex"));
    }

    #[test]
    fn test_empty_id() {
        let error = UniqueEntityId::new("").unwrap_err();
        assert_eq!(error.details()[0].msg(), "The id must not be empty.");
    }

    #[test]
    fn test_uppercase_hex_is_rejected() {
        assert!(UniqueEntityId::new("652F1E9B2C4D8A3F7B1E9C0D").is_err());
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(UniqueEntityId::new("652f1e9b").is_err());
    }

    #[test]
    fn test_display_is_bare_value() {
        let id = UniqueEntityId::new(VALID).unwrap();
        assert_eq!(id.to_string(), VALID);
    }

    #[test]
    fn test_serde_canonical_string() {
        let id = UniqueEntityId::new(VALID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", VALID));

        let back: UniqueEntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_revalidates() {
        let result: Result<UniqueEntityId, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_base_error_conversion_keeps_details() {
        let error = UniqueEntityId::new("nope").unwrap_err();
        let base: DomainValidationError = error.into();
        assert_eq!(base.message(), "Invalid id");
        assert_eq!(base.errors().len(), 1);
    }
}
