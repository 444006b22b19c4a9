//! Domain validation errors
//!
//! [`DomainValidationError`] is the error returned when construction of a
//! domain object fails validation. Specialized errors built by individual
//! domain types add diagnostic context, but every one of them exposes the
//! same report shape through [`ValidationFailure`] so outer layers can
//! render an ordered `{loc, msg}` list without knowing the concrete type.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::validation::result::{ValidationErrorDetails, ValidationResult};

/// Uniform reporting surface shared by every validation error.
pub trait ValidationFailure: Error {
    /// Human-readable summary for the whole failure.
    fn message(&self) -> &str;

    /// The ordered field-level failures.
    fn details(&self) -> &[ValidationErrorDetails];
}

/// Error returned when a domain object fails its construction validation.
///
/// Carries the complete, ordered failure list of one construction attempt.
/// Nothing is dropped or deduplicated on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainValidationError {
    message: Cow<'static, str>,
    errors: Vec<ValidationErrorDetails>,
}

impl DomainValidationError {
    pub const DEFAULT_MESSAGE: &'static str = "Validation failed";

    pub fn new(errors: Vec<ValidationErrorDetails>) -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
            errors,
        }
    }

    pub fn from_result(result: ValidationResult) -> Self {
        Self::new(result.into_errors())
    }

    /// Replace the summary message, keeping the failure list.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn errors(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationErrorDetails> {
        self.errors
    }
}

impl fmt::Display for DomainValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, error.path(), error.msg())?;
        }
        Ok(())
    }
}

impl Error for DomainValidationError {}

impl ValidationFailure for DomainValidationError {
    fn message(&self) -> &str {
        &self.message
    }

    fn details(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }
}
