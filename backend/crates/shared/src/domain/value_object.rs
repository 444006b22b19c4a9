//! Value Object base
//!
//! A value object is an immutable, identity-less domain value that validates
//! itself exactly once, at construction. Every concrete value object shares
//! the same pipeline:
//!
//! 1. a constructor populates the fields,
//! 2. [`ValueObject::validated`] runs the type's own rule set,
//! 3. an invalid candidate is turned into the type's error by
//!    [`ValueObject::build_error`] and dropped; no instance escapes,
//! 4. a valid candidate is handed back and never changes afterwards.
//!
//! Immutability is field privacy: concrete value objects expose read
//! accessors only, so a value observed once is the value forever. Two value
//! objects are equal when all their fields are equal.

use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::validation::result::ValidationResult;

/// Contract for self-validating, immutable domain values.
pub trait ValueObject: Sized {
    /// Error produced when validation fails.
    ///
    /// The `From<DomainValidationError>` bound powers the default
    /// [`ValueObject::build_error`] and lets callers that only need the
    /// generic contract convert down to the base error.
    type Error: ValidationFailure + From<DomainValidationError>;

    /// The type's own rule set, evaluated over the populated fields.
    fn validate(&self) -> ValidationResult;

    /// Turn a failed validation into the type's error.
    ///
    /// Override to attach diagnostic context such as the offending raw
    /// value; the default produces the base [`DomainValidationError`].
    fn build_error(&self, result: ValidationResult) -> Self::Error {
        DomainValidationError::from_result(result).into()
    }

    /// Construction pipeline: validate the candidate, then either hand it
    /// back untouched or drop it and return the built error.
    fn validated(self) -> Result<Self, Self::Error> {
        let result = self.validate();
        if result.is_valid() {
            Ok(self)
        } else {
            Err(self.build_error(result))
        }
    }
}
