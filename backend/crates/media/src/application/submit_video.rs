//! Submit Video Use Case
//!
//! Stores an uploaded file, creates the video record that processing will
//! pick up, and notifies the owner when a sender address is configured.

use std::sync::Arc;

use kernel::domain::entity::Entity;
use kernel::value_object::email::Email;
use kernel::value_object::external_entity_id::ExternalEntityId;

use crate::application::config::MediaConfig;
use crate::application::ports::{EmailSender, FileStorage};
use crate::domain::entity::user::User;
use crate::domain::entity::video::Video;
use crate::domain::repository::{UserRepository, VideoRepository};
use crate::error::{MediaError, MediaResult};

/// Submission input
pub struct SubmitVideoInput {
    /// External id of the owner
    pub user_id: String,
    pub filename: String,
    pub content: Vec<u8>,
}

/// Submission output
#[derive(Debug)]
pub struct SubmitVideoOutput {
    /// External id of the created video
    pub id: String,
}

/// Submit video use case
pub struct SubmitVideoUseCase<U, V, S, E>
where
    U: UserRepository,
    V: VideoRepository,
    S: FileStorage,
    E: EmailSender,
{
    user_repo: Arc<U>,
    video_repo: Arc<V>,
    storage: Arc<S>,
    email_sender: Arc<E>,
    config: Arc<MediaConfig>,
}

impl<U, V, S, E> SubmitVideoUseCase<U, V, S, E>
where
    U: UserRepository,
    V: VideoRepository,
    S: FileStorage,
    E: EmailSender,
{
    pub fn new(
        user_repo: Arc<U>,
        video_repo: Arc<V>,
        storage: Arc<S>,
        email_sender: Arc<E>,
        config: Arc<MediaConfig>,
    ) -> Self {
        Self {
            user_repo,
            video_repo,
            storage,
            email_sender,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitVideoInput) -> MediaResult<SubmitVideoOutput> {
        let owner_id = ExternalEntityId::new(input.user_id)?;
        let user = self
            .user_repo
            .find_by_external_id(&owner_id)
            .await?
            .ok_or(MediaError::UserNotFound)?;

        self.storage
            .upload_file(&input.filename, &input.content)
            .await?;

        let video = Video::new(user.clone(), input.filename)?;
        let video = self.video_repo.insert(video).await?;

        self.notify(&user, &video).await;

        tracing::info!(
            external_id = %video.external_id(),
            filename = %video.filename,
            "Video submitted"
        );

        Ok(SubmitVideoOutput {
            id: video.external_id().to_string(),
        })
    }

    /// Notification failures must not fail the submission.
    async fn notify(&self, user: &User, video: &Video) {
        let Some(sender) = &self.config.sender_address else {
            return;
        };
        let email = match Email::new(
            "Your video was received",
            format!("Processing of {} has started.", video.filename),
            vec![user.email.clone()],
            sender.clone(),
        ) {
            Ok(email) => email,
            Err(err) => {
                tracing::warn!(error = %err, "Could not build the notification email");
                return;
            }
        };
        if let Err(err) = self.email_sender.send_email(&email).await {
            tracing::warn!(error = %err, "Failed to send the submission notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{
        FakePasswordHasher, InMemoryFileStorage, InMemoryUserRepo, InMemoryVideoRepo,
        RecordingEmailSender,
    };
    use crate::application::ports::PasswordHasher;
    use crate::domain::value_object::video_status::VideoStatus;
    use kernel::value_object::email_address::EmailAddress;

    struct Setup {
        uc: SubmitVideoUseCase<
            InMemoryUserRepo,
            InMemoryVideoRepo,
            InMemoryFileStorage,
            RecordingEmailSender,
        >,
        owner_id: String,
    }

    async fn setup(config: MediaConfig) -> Setup {
        let user_repo = Arc::new(InMemoryUserRepo::default());
        let hashed = FakePasswordHasher.hash("correct horse battery").unwrap();
        let user = User::new(
            "alice",
            EmailAddress::new("alice@example.com").unwrap(),
            hashed,
        )
        .unwrap();
        let user = user_repo.insert(user).await.unwrap();

        Setup {
            owner_id: user.external_id().to_string(),
            uc: SubmitVideoUseCase::new(
                user_repo,
                Arc::new(InMemoryVideoRepo::default()),
                Arc::new(InMemoryFileStorage::default()),
                Arc::new(RecordingEmailSender::default()),
                Arc::new(config),
            ),
        }
    }

    fn input(owner_id: &str) -> SubmitVideoInput {
        SubmitVideoInput {
            user_id: owner_id.to_string(),
            filename: "holiday.mp4".to_string(),
            content: b"not actually mpeg".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_submission_stores_file_and_video() {
        let Setup { uc, owner_id } = setup(MediaConfig::default()).await;
        uc.execute(input(&owner_id)).await.unwrap();

        assert!(uc.storage.files.lock().unwrap().contains_key("holiday.mp4"));

        let videos = uc.video_repo.videos.lock().unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].status, VideoStatus::Uploaded);
        assert_eq!(videos[0].user.username, "alice");
    }

    #[tokio::test]
    async fn test_unknown_owner_is_rejected() {
        let Setup { uc, .. } = setup(MediaConfig::default()).await;
        let ghost = ExternalEntityId::generate().to_string();
        let error = uc.execute(input(&ghost)).await.unwrap_err();
        assert!(matches!(error, MediaError::UserNotFound));
        assert!(uc.storage.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_owner_id_is_rejected() {
        let Setup { uc, .. } = setup(MediaConfig::default()).await;
        let error = uc.execute(input("not-a-uuid")).await.unwrap_err();
        assert!(matches!(error, MediaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_notification_sent_when_sender_configured() {
        let config = MediaConfig::default()
            .with_sender(EmailAddress::new("no-reply@example.com").unwrap());
        let Setup { uc, owner_id } = setup(config).await;
        uc.execute(input(&owner_id)).await.unwrap();

        let sent = uc.email_sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_addresses()[0].as_str(), "alice@example.com");
        assert_eq!(sent[0].from_address().as_str(), "no-reply@example.com");
    }

    #[tokio::test]
    async fn test_no_notification_without_sender() {
        let Setup { uc, owner_id } = setup(MediaConfig::default()).await;
        uc.execute(input(&owner_id)).await.unwrap();
        assert!(uc.email_sender.sent.lock().unwrap().is_empty());
    }
}
