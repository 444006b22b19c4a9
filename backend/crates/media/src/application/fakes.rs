//! In-memory fakes behind the repository and port traits, for use-case
//! tests. Assigned internal ids count up through the object-id format the
//! real store would hand out.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use kernel::domain::entity::Entity;
use kernel::value_object::email::Email;
use kernel::value_object::email_address::EmailAddress;
use kernel::value_object::external_entity_id::ExternalEntityId;
use kernel::value_object::unique_entity_id::UniqueEntityId;

use crate::application::ports::{EmailSender, FileStorage, PasswordHasher};
use crate::domain::entity::user::User;
use crate::domain::entity::video::Video;
use crate::domain::repository::{UserRepository, VideoRepository};
use crate::error::{MediaError, MediaResult};

#[derive(Default)]
pub(crate) struct InMemoryUserRepo {
    pub(crate) users: Mutex<Vec<User>>,
    counter: AtomicUsize,
}

impl InMemoryUserRepo {
    fn next_object_id(&self) -> UniqueEntityId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        UniqueEntityId::new(format!("{:024x}", n)).expect("well-formed object id")
    }
}

impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, mut user: User) -> MediaResult<User> {
        user.meta_mut().assign_id(self.next_object_id());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UniqueEntityId) -> MediaResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id() == Some(id)).cloned())
    }

    async fn find_by_external_id(&self, id: &ExternalEntityId) -> MediaResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.external_id() == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> MediaResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryVideoRepo {
    pub(crate) videos: Mutex<Vec<Video>>,
    counter: AtomicUsize,
}

impl InMemoryVideoRepo {
    fn next_object_id(&self) -> UniqueEntityId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        UniqueEntityId::new(format!("{:024x}", n)).expect("well-formed object id")
    }
}

impl VideoRepository for InMemoryVideoRepo {
    async fn insert(&self, mut video: Video) -> MediaResult<Video> {
        video.meta_mut().assign_id(self.next_object_id());
        self.videos.lock().unwrap().push(video.clone());
        Ok(video)
    }

    async fn find_by_id(&self, id: &UniqueEntityId) -> MediaResult<Option<Video>> {
        let videos = self.videos.lock().unwrap();
        Ok(videos.iter().find(|v| v.id() == Some(id)).cloned())
    }
}

pub(crate) struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, password: &str) -> MediaResult<String> {
        Ok(format!("hashed::{password}"))
    }

    fn verify(&self, password: &str, hashed_password: &str) -> bool {
        hashed_password == format!("hashed::{password}")
    }
}

#[derive(Default)]
pub(crate) struct RecordingEmailSender {
    pub(crate) sent: Mutex<Vec<Email>>,
}

impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, email: &Email) -> MediaResult<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    async fn send_bulk_emails(&self, emails: &[Email]) -> MediaResult<()> {
        self.sent.lock().unwrap().extend(emails.iter().cloned());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryFileStorage {
    pub(crate) files: Mutex<HashMap<String, Vec<u8>>>,
}

impl FileStorage for InMemoryFileStorage {
    async fn upload_file(&self, file_name: &str, file_data: &[u8]) -> MediaResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), file_data.to_vec());
        Ok(())
    }

    async fn download_file(&self, file_name: &str) -> MediaResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(file_name)
            .cloned()
            .ok_or_else(|| MediaError::Storage(format!("no such file: {file_name}")))
    }
}
