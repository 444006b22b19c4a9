//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from standard library and domain error
//! types to [`AppError`]. Validation failures keep their ordered `{loc, msg}`
//! list so transport layers can render a complete field-error body.

use super::app_error::AppError;
use super::kind::ErrorKind;
use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::value_object::email_address::InvalidEmailAddressError;
use crate::value_object::external_entity_id::InvalidExternalIdError;
use crate::value_object::unique_entity_id::InvalidUniqueEntityIdError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::bad_request("Invalid UTF-8 string").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// Domain validation conversions
// ============================================================================

impl From<DomainValidationError> for AppError {
    fn from(err: DomainValidationError) -> Self {
        AppError::unprocessable(err.message().to_owned()).with_details(err.into_errors())
    }
}

impl From<InvalidUniqueEntityIdError> for AppError {
    fn from(err: InvalidUniqueEntityIdError) -> Self {
        AppError::from(DomainValidationError::from(err))
    }
}

impl From<InvalidExternalIdError> for AppError {
    fn from(err: InvalidExternalIdError) -> Self {
        AppError::from(DomainValidationError::from(err))
    }
}

impl From<InvalidEmailAddressError> for AppError {
    fn from(err: InvalidEmailAddressError) -> Self {
        AppError::from(DomainValidationError::from(err))
    }
}
