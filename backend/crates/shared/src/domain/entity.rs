//! Entity base
//!
//! An entity is an identity-bearing domain object: it carries an internal
//! persistence id (absent until first stored), a public external id and
//! lifecycle timestamps, next to whatever fields the concrete type declares.
//!
//! Entities follow the same construct-validate-or-fail pipeline as value
//! objects, but the base supplies no rules of its own: every implementor
//! provides its full rule set through [`Entity::validate`], usually by
//! delegating to a dedicated [`Validator`]. Entities are not frozen; field
//! reassignment after construction is allowed and does **not** re-run
//! validation; callers that mutate re-validate explicitly when they need
//! the invariant re-checked.
//!
//! [`Validator`]: crate::validation::validator::Validator

use chrono::{DateTime, Utc};

use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::validation::result::ValidationResult;
use crate::value_object::external_entity_id::ExternalEntityId;
use crate::value_object::unique_entity_id::UniqueEntityId;

/// Metadata carried by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMeta {
    id: Option<UniqueEntityId>,
    external_id: ExternalEntityId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Fresh metadata for an entity that has never been persisted: no
    /// internal id, a generated external id, both timestamps stamped now.
    pub fn generate() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            external_id: ExternalEntityId::generate(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild metadata from already-validated parts.
    pub fn restore(
        id: Option<UniqueEntityId>,
        external_id: ExternalEntityId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            external_id,
            created_at,
            updated_at,
        }
    }

    /// Internal persistence id; `None` until the entity is first stored.
    pub fn id(&self) -> Option<&UniqueEntityId> {
        self.id.as_ref()
    }

    pub fn external_id(&self) -> &ExternalEntityId {
        &self.external_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Record the internal id handed out by the persistence layer.
    pub fn assign_id(&mut self, id: UniqueEntityId) {
        self.id = Some(id);
    }

    /// Stamp a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::generate()
    }
}

/// An internal id as supplied by a caller.
///
/// Persistence code that already went through [`UniqueEntityId`] hands over
/// the value type; anything else arrives as the raw backend string and is
/// rejected by the aggregate-root structural checks.
#[derive(Debug, Clone, PartialEq)]
pub enum IdInput {
    Id(UniqueEntityId),
    Raw(String),
}

impl From<UniqueEntityId> for IdInput {
    fn from(id: UniqueEntityId) -> Self {
        IdInput::Id(id)
    }
}

impl From<String> for IdInput {
    fn from(raw: String) -> Self {
        IdInput::Raw(raw)
    }
}

impl From<&str> for IdInput {
    fn from(raw: &str) -> Self {
        IdInput::Raw(raw.to_string())
    }
}

/// A creation timestamp as supplied by a caller: either a real timestamp or
/// a wire value that never became one.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    At(DateTime<Utc>),
    Raw(String),
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(at: DateTime<Utc>) -> Self {
        TimestampInput::At(at)
    }
}

impl From<String> for TimestampInput {
    fn from(raw: String) -> Self {
        TimestampInput::Raw(raw)
    }
}

impl From<&str> for TimestampInput {
    fn from(raw: &str) -> Self {
        TimestampInput::Raw(raw.to_string())
    }
}

/// Entity metadata as it arrives from outside the domain (decoded payloads,
/// persistence rehydration). Unset fields take the fresh-entity defaults;
/// raw id/timestamp values are rejected during aggregate-root construction,
/// never silently coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMetaInput {
    pub id: Option<IdInput>,
    pub external_id: Option<ExternalEntityId>,
    pub created_at: Option<TimestampInput>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Contract for identity-bearing domain objects.
pub trait Entity: Sized {
    /// Error produced when validation fails; see
    /// [`ValueObject::Error`](crate::domain::value_object::ValueObject::Error)
    /// for the role of the `From` bound.
    type Error: ValidationFailure + From<DomainValidationError>;

    fn meta(&self) -> &EntityMeta;

    fn meta_mut(&mut self) -> &mut EntityMeta;

    /// The implementor's full rule set; the base contributes none.
    fn validate(&self) -> ValidationResult;

    /// Turn a failed validation into the type's error; the default produces
    /// the base [`DomainValidationError`].
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

    fn id(&self) -> Option<&UniqueEntityId> {
        self.meta().id()
    }

    fn external_id(&self) -> &ExternalEntityId {
        self.meta().external_id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules;

    #[derive(Debug, Clone)]
    struct Label {
        meta: EntityMeta,
        name: String,
    }

    impl Label {
        fn new(name: impl Into<String>) -> Result<Self, DomainValidationError> {
            Self {
                meta: EntityMeta::generate(),
                name: name.into(),
            }
            .validated()
        }
    }

    impl Entity for Label {
        type Error = DomainValidationError;

        fn meta(&self) -> &EntityMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut EntityMeta {
            &mut self.meta
        }

        fn validate(&self) -> ValidationResult {
            let mut result = ValidationResult::valid();
            result.check(rules::non_empty(&self.name, "name"));
            result
        }
    }

    #[test]
    fn test_fresh_meta_has_no_internal_id() {
        let label = Label::new("draft").unwrap();
        assert!(label.id().is_none());
        assert_eq!(label.created_at(), label.updated_at());
    }

    #[test]
    fn test_external_id_is_generated() {
        let a = Label::new("a").unwrap();
        let b = Label::new("b").unwrap();
        assert_ne!(a.external_id(), b.external_id());
    }

    #[test]
    fn test_invalid_entity_never_constructs() {
        let error = Label::new("").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "name");
    }

    #[test]
    fn test_touch_advances_only_updated_at() {
        let mut label = Label::new("draft").unwrap();
        let created = label.created_at();
        label.meta_mut().touch();
        assert_eq!(label.created_at(), created);
        assert!(label.updated_at() >= created);
    }

    #[test]
    fn test_assign_id() {
        let mut label = Label::new("draft").unwrap();
        let id = UniqueEntityId::new("0123456789abcdef01234567").unwrap();
        label.meta_mut().assign_id(id.clone());
        assert_eq!(label.id(), Some(&id));
    }

    #[test]
    fn test_mutation_does_not_revalidate() {
        let mut label = Label::new("draft").unwrap();
        // The framework re-checks at construction time only; an explicit
        // validated() call is the caller's tool for re-checking.
        label.name = String::new();
        assert!(label.validate().errors().len() == 1);
    }
}
