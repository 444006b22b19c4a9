//! User Entity
//!
//! Account aggregate: username, validated email address, hashed password.
//! Credentials are hashed by the application layer before they get here;
//! this entity never sees a plain text password.

use kernel::domain::aggregate_root::AggregateRoot;
use kernel::domain::entity::{Entity, EntityMeta, EntityMetaInput};
use kernel::validation::error::DomainValidationError;
use kernel::validation::result::ValidationResult;
use kernel::validation::rules;
use kernel::validation::validator::Validator;
use kernel::value_object::email_address::EmailAddress;

/// Rule set for [`User`] candidates.
pub struct UserValidator;

impl Validator for UserValidator {
    type Candidate = User;

    fn validate(&self, user: &User) -> ValidationResult {
        let mut result = ValidationResult::valid();
        result.check(rules::non_empty(&user.username, "username"));
        result.check(rules::non_empty(&user.hashed_password, "hashed_password"));
        result
    }
}

/// User aggregate root
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    meta: EntityMeta,
    pub username: String,
    pub email: EmailAddress,
    pub hashed_password: String,
}

impl User {
    /// Create a new, never-persisted user.
    pub fn new(
        username: impl Into<String>,
        email: EmailAddress,
        hashed_password: impl Into<String>,
    ) -> Result<Self, DomainValidationError> {
        let username = username.into();
        let hashed_password = hashed_password.into();
        Self::create(|meta| Self {
            meta,
            username,
            email,
            hashed_password,
        })
    }

    /// Rebuild a user from stored parts.
    pub fn restore(
        input: EntityMetaInput,
        username: impl Into<String>,
        email: EmailAddress,
        hashed_password: impl Into<String>,
    ) -> Result<Self, DomainValidationError> {
        let username = username.into();
        let hashed_password = hashed_password.into();
        Self::from_parts(input, |meta| Self {
            meta,
            username,
            email,
            hashed_password,
        })
    }
}

impl Entity for User {
    type Error = DomainValidationError;

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn validate(&self) -> ValidationResult {
        UserValidator.validate(self)
    }
}

impl AggregateRoot for User {}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::domain::entity::IdInput;

    fn email() -> EmailAddress {
        EmailAddress::new("user@example.com").unwrap()
    }

    #[test]
    fn test_new_user() {
        let user = User::new("alice", email(), "hashed::secret").unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email.as_str(), "user@example.com");
        assert!(user.id().is_none());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let error = User::new("", email(), "hashed::secret").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "username");
    }

    #[test]
    fn test_all_failures_reported_in_field_order() {
        let error = User::new("", email(), "").unwrap_err();
        let paths: Vec<String> = error.errors().iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["username", "hashed_password"]);
    }

    #[test]
    fn test_restore_rejects_raw_internal_id() {
        let input = EntityMetaInput {
            id: Some(IdInput::from("652f1e9b2c4d8a3f7b1e9c0d")),
            ..EntityMetaInput::default()
        };
        let error = User::restore(input, "alice", email(), "hashed::secret").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "id");
    }

    #[test]
    fn test_error_order_is_deterministic() {
        let first = User::new("", email(), "").unwrap_err();
        let second = User::new("", email(), "").unwrap_err();
        assert_eq!(first.errors(), second.errors());
    }
}
