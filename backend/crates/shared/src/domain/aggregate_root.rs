//! Aggregate Root base
//!
//! An aggregate root is an entity with structural invariants layered on top
//! of its own rule set. Construction resolves loosely typed metadata
//! ([`EntityMetaInput`]), runs the implementor's rules on the assembled
//! candidate, then appends the structural results: `created_at` must be a
//! real timestamp, and the internal id, when present, must be the validated
//! [`UniqueEntityId`] value type rather than a bare backend string. All
//! failures come back in one combined error: implementor errors first, then
//! `created_at`, then `id`.
//!
//! [`UniqueEntityId`]: crate::value_object::unique_entity_id::UniqueEntityId

use chrono::Utc;

use crate::domain::entity::{Entity, EntityMeta, EntityMetaInput, IdInput, TimestampInput};
use crate::validation::result::{ValidationErrorDetails, ValidationResult};

/// Contract for entities that act as the consistency boundary of their
/// aggregate. Construction goes through [`AggregateRoot::create`] or
/// [`AggregateRoot::from_parts`]; both run the merged validation.
pub trait AggregateRoot: Entity {
    /// Create a brand-new aggregate: no internal id, generated external id,
    /// construction-time timestamps.
    fn create<F>(build: F) -> Result<Self, Self::Error>
    where
        F: FnOnce(EntityMeta) -> Self,
    {
        Self::from_parts(EntityMetaInput::default(), build)
    }

    /// Assemble an aggregate from loosely typed metadata and the
    /// implementor's own fields.
    ///
    /// `build` receives the resolved metadata and must only populate fields;
    /// the candidate it returns is dropped whenever any rule, its own or
    /// structural, failed.
    fn from_parts<F>(input: EntityMetaInput, build: F) -> Result<Self, Self::Error>
    where
        F: FnOnce(EntityMeta) -> Self,
    {
        let (meta, structural) = resolve_meta(input);
        let candidate = build(meta);
        let result = candidate.validate().merge(structural);
        if result.is_valid() {
            Ok(candidate)
        } else {
            Err(candidate.build_error(result))
        }
    }
}

/// Resolves loose metadata into [`EntityMeta`], collecting the structural
/// failures in the fixed order: `created_at`, then `id`.
///
/// A rejected field falls back to a throwaway default so the candidate can
/// still be assembled for its own validation; the candidate never survives
/// a non-empty failure list.
fn resolve_meta(input: EntityMetaInput) -> (EntityMeta, ValidationResult) {
    let mut structural = ValidationResult::valid();
    let now = Utc::now();

    let created_at = match input.created_at {
        None => now,
        Some(TimestampInput::At(at)) => at,
        Some(TimestampInput::Raw(_)) => {
            structural.push(ValidationErrorDetails::field(
                "created_at",
                "The created_at field must be a timestamp.",
            ));
            now
        }
    };

    let id = match input.id {
        None => None,
        Some(IdInput::Id(id)) => Some(id),
        Some(IdInput::Raw(_)) => {
            structural.push(ValidationErrorDetails::field(
                "id",
                "The id field must be a UniqueEntityId.",
            ));
            None
        }
    };

    let meta = EntityMeta::restore(
        id,
        input.external_id.unwrap_or_default(),
        created_at,
        input.updated_at.unwrap_or(now),
    );
    (meta, structural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::DomainValidationError;
    use crate::validation::rules;
    use crate::value_object::unique_entity_id::UniqueEntityId;

    #[derive(Debug, Clone)]
    struct Note {
        meta: EntityMeta,
        title: String,
    }

    impl Note {
        fn new(title: impl Into<String>) -> Result<Self, DomainValidationError> {
            let title = title.into();
            Self::create(|meta| Self { meta, title })
        }

        fn restore(
            input: EntityMetaInput,
            title: impl Into<String>,
        ) -> Result<Self, DomainValidationError> {
            let title = title.into();
            Self::from_parts(input, |meta| Self { meta, title })
        }
    }

    impl Entity for Note {
        type Error = DomainValidationError;

        fn meta(&self) -> &EntityMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut EntityMeta {
            &mut self.meta
        }

        fn validate(&self) -> ValidationResult {
            let mut result = ValidationResult::valid();
            result.check(rules::non_empty(&self.title, "title"));
            result
        }
    }

    impl AggregateRoot for Note {}

    fn object_id() -> UniqueEntityId {
        UniqueEntityId::new("0123456789abcdef01234567").unwrap()
    }

    #[test]
    fn test_create_fresh_aggregate() {
        let note = Note::new("groceries").unwrap();
        assert!(note.id().is_none());
        assert_eq!(note.title, "groceries");
    }

    #[test]
    fn test_raw_created_at_is_rejected_alone() {
        let input = EntityMetaInput {
            created_at: Some(TimestampInput::from("not-a-datetime")),
            ..EntityMetaInput::default()
        };
        let error = Note::restore(input, "groceries").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "created_at");
    }

    #[test]
    fn test_raw_id_is_rejected() {
        let input = EntityMetaInput {
            id: Some(IdInput::from("652f1e9b2c4d")),
            ..EntityMetaInput::default()
        };
        let error = Note::restore(input, "groceries").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "id");
    }

    #[test]
    fn test_validated_id_is_accepted() {
        let input = EntityMetaInput {
            id: Some(IdInput::from(object_id())),
            ..EntityMetaInput::default()
        };
        let note = Note::restore(input, "groceries").unwrap();
        assert_eq!(note.id(), Some(&object_id()));
    }

    #[test]
    fn test_merge_is_complete_and_ordered() {
        // Both the aggregate's own rule and both structural checks fail:
        // the single error carries all three, implementor rules first.
        let input = EntityMetaInput {
            id: Some(IdInput::from("652f1e9b2c4d")),
            created_at: Some(TimestampInput::from("not-a-datetime")),
            ..EntityMetaInput::default()
        };
        let error = Note::restore(input, "").unwrap_err();
        let paths: Vec<String> = error.errors().iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["title", "created_at", "id"]);
    }

    #[test]
    fn test_error_order_is_deterministic() {
        let input = || EntityMetaInput {
            created_at: Some(TimestampInput::from("not-a-datetime")),
            ..EntityMetaInput::default()
        };
        let first = Note::restore(input(), "").unwrap_err();
        let second = Note::restore(input(), "").unwrap_err();
        assert_eq!(first.errors(), second.errors());
    }

    #[test]
    fn test_restore_keeps_supplied_timestamps() {
        let created = Utc::now();
        let input = EntityMetaInput {
            created_at: Some(TimestampInput::At(created)),
            updated_at: Some(created),
            ..EntityMetaInput::default()
        };
        let note = Note::restore(input, "groceries").unwrap();
        assert_eq!(note.created_at(), created);
        assert_eq!(note.updated_at(), created);
    }
}
