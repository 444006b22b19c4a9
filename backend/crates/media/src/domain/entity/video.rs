//! Video Entity
//!
//! A submitted video owned by a user: original filename, processing status
//! and, once processing finished, the key of the processed file.

use kernel::domain::aggregate_root::AggregateRoot;
use kernel::domain::entity::{Entity, EntityMeta, EntityMetaInput};
use kernel::validation::error::DomainValidationError;
use kernel::validation::result::ValidationResult;
use kernel::validation::rules;
use kernel::validation::validator::Validator;

use crate::domain::entity::user::User;
use crate::domain::value_object::video_status::VideoStatus;

/// Rule set for [`Video`] candidates.
pub struct VideoValidator;

impl Validator for VideoValidator {
    type Candidate = Video;

    fn validate(&self, video: &Video) -> ValidationResult {
        let mut result = ValidationResult::valid();
        result.check(rules::non_empty(&video.filename, "filename"));
        result
    }
}

/// Video aggregate root
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    meta: EntityMeta,
    pub user: User,
    pub filename: String,
    pub status: VideoStatus,
    pub processed_file: Option<String>,
}

impl Video {
    /// Create a freshly submitted video, waiting to be processed.
    pub fn new(user: User, filename: impl Into<String>) -> Result<Self, DomainValidationError> {
        let filename = filename.into();
        Self::create(|meta| Self {
            meta,
            user,
            filename,
            status: VideoStatus::default(),
            processed_file: None,
        })
    }

    /// Rebuild a video from stored parts.
    pub fn restore(
        input: EntityMetaInput,
        user: User,
        filename: impl Into<String>,
        status: VideoStatus,
        processed_file: Option<String>,
    ) -> Result<Self, DomainValidationError> {
        let filename = filename.into();
        Self::from_parts(input, |meta| Self {
            meta,
            user,
            filename,
            status,
            processed_file,
        })
    }

    /// Record that a processor picked the video up.
    pub fn start_processing(&mut self) {
        self.status = VideoStatus::Processing;
        self.meta.touch();
    }

    /// Record a successful processing run and the resulting file key.
    pub fn mark_processed(&mut self, processed_file: impl Into<String>) {
        self.status = VideoStatus::Processed;
        self.processed_file = Some(processed_file.into());
        self.meta.touch();
    }

    /// Record a failed processing run.
    pub fn mark_failed(&mut self) {
        self.status = VideoStatus::Failed;
        self.meta.touch();
    }
}

impl Entity for Video {
    type Error = DomainValidationError;

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn validate(&self) -> ValidationResult {
        VideoValidator.validate(self)
    }
}

impl AggregateRoot for Video {}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::domain::entity::TimestampInput;
    use kernel::value_object::email_address::EmailAddress;

    fn owner() -> User {
        User::new(
            "alice",
            EmailAddress::new("alice@example.com").unwrap(),
            "hashed::secret",
        )
        .unwrap()
    }

    #[test]
    fn test_new_video_starts_uploaded() {
        let video = Video::new(owner(), "holiday.mp4").unwrap();
        assert_eq!(video.status, VideoStatus::Uploaded);
        assert!(video.processed_file.is_none());
        assert!(video.id().is_none());
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let error = Video::new(owner(), "").unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "filename");
    }

    #[test]
    fn test_processing_lifecycle() {
        let mut video = Video::new(owner(), "holiday.mp4").unwrap();
        video.start_processing();
        assert_eq!(video.status, VideoStatus::Processing);

        video.mark_processed("processed/holiday.mp4");
        assert_eq!(video.status, VideoStatus::Processed);
        assert_eq!(video.processed_file.as_deref(), Some("processed/holiday.mp4"));
        assert!(video.updated_at() >= video.created_at());
    }

    #[test]
    fn test_mark_failed() {
        let mut video = Video::new(owner(), "holiday.mp4").unwrap();
        video.mark_failed();
        assert_eq!(video.status, VideoStatus::Failed);
    }

    #[test]
    fn test_restore_rejects_raw_created_at() {
        let input = EntityMetaInput {
            created_at: Some(TimestampInput::from("2023-13-45T99:99:99")),
            ..EntityMetaInput::default()
        };
        let error = Video::restore(
            input,
            owner(),
            "holiday.mp4",
            VideoStatus::Processed,
            Some("processed/holiday.mp4".to_string()),
        )
        .unwrap_err();
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].path(), "created_at");
    }
}
