//! Media Error Types
//!
//! Feature-level error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use kernel::validation::error::DomainValidationError;
use kernel::value_object::email_address::InvalidEmailAddressError;
use kernel::value_object::external_entity_id::InvalidExternalIdError;
use kernel::value_object::unique_entity_id::InvalidUniqueEntityIdError;
use thiserror::Error;

/// Media-specific result type alias
pub type MediaResult<T> = Result<T, MediaError>;

/// Media-specific error variants
#[derive(Debug, Error)]
pub enum MediaError {
    /// A user with this email address already exists
    #[error("A user with this email address already exists")]
    EmailAlreadyRegistered { email: String },

    /// Password rejected by the registration policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Video not found
    #[error("Video not found")]
    VideoNotFound,

    /// Domain object failed its construction validation
    #[error(transparent)]
    Validation(#[from] DomainValidationError),

    /// File storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Email delivery error
    #[error("Email delivery error: {0}")]
    EmailDelivery(String),

    /// Repository error
    #[error("Repository error: {0}")]
    Repository(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MediaError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::EmailAlreadyRegistered { .. } => ErrorKind::Conflict,
            MediaError::PasswordValidation(_) => ErrorKind::BadRequest,
            MediaError::UserNotFound | MediaError::VideoNotFound => ErrorKind::NotFound,
            MediaError::Validation(_) => ErrorKind::UnprocessableEntity,
            MediaError::Storage(_)
            | MediaError::EmailDelivery(_)
            | MediaError::Repository(_)
            | MediaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping the field-error list for validation
    /// failures.
    pub fn to_app_error(&self) -> AppError {
        match self {
            MediaError::Validation(err) => AppError::from(err.clone()),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl From<InvalidEmailAddressError> for MediaError {
    fn from(err: InvalidEmailAddressError) -> Self {
        MediaError::Validation(err.into())
    }
}

impl From<InvalidExternalIdError> for MediaError {
    fn from(err: InvalidExternalIdError) -> Self {
        MediaError::Validation(err.into())
    }
}

impl From<InvalidUniqueEntityIdError> for MediaError {
    fn from(err: InvalidUniqueEntityIdError) -> Self {
        MediaError::Validation(err.into())
    }
}
