pub mod auth;
pub mod config;
pub mod core;
pub mod friends;
pub mod media;
pub mod messages;
pub mod models;
pub mod notifications;
pub mod posts;
pub mod render;
pub mod settings;
pub mod storage;
pub mod users;

pub use crate::core::errors::{AppError, Result};
pub use crate::models::models::{
    Comment, Conversation, Friend, Message, Notification, Post, Sender, Settings, User, UserStats,
};
pub use crate::storage::{FileStore, KeyValue, MemoryStore, Repository};

use crate::config::{
    CONVERSATIONS_KEY, FRIENDS_KEY, NOTIFICATIONS_KEY, POSTS_KEY, SESSION_KEY, SETTINGS_KEY,
    USERS_KEY,
};

/// In-memory mirror of every persisted collection. Loaded once at open;
/// mutators write through to the repository on every change.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub friends: Vec<Friend>,
    pub notifications: Vec<Notification>,
    pub conversations: Vec<Conversation>,
    pub settings: Settings,
}

/// Owned application state, threaded explicitly through all mutators and
/// renderers. The DOM (or whatever rendering surface the host uses) only
/// ever holds display copies of this state.
pub struct App {
    pub(crate) repo: Repository,
    pub store: Store,
    pub(crate) session: Option<String>,
}

impl App {
    /// Load all collections from the repository. Absent keys load as empty
    /// collections; the session is restored from its persisted marker.
    pub fn open(repo: Repository) -> Result<Self> {
        let store = Store {
            users: repo.get_json(USERS_KEY)?.unwrap_or_default(),
            posts: repo.get_json(POSTS_KEY)?.unwrap_or_default(),
            friends: repo.get_json(FRIENDS_KEY)?.unwrap_or_default(),
            notifications: repo.get_json(NOTIFICATIONS_KEY)?.unwrap_or_default(),
            conversations: repo.get_json(CONVERSATIONS_KEY)?.unwrap_or_default(),
            settings: repo.get_json(SETTINGS_KEY)?.unwrap_or_default(),
        };
        let session = repo.get_json(SESSION_KEY)?;
        Ok(App { repo, store, session })
    }

    /// Open against a fresh in-memory store. Nothing survives the process.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(Repository::new(Box::new(MemoryStore::new())))
    }

    /// Open against a file-backed store rooted at `dir`.
    pub fn open_on_disk(dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let store = FileStore::open(dir)?;
        Self::open(Repository::new(Box::new(store)))
    }

    /// Username recorded by the last successful login, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub(crate) fn set_session(&mut self, username: &str) -> Result<()> {
        self.session = Some(username.to_string());
        self.repo.set_json(SESSION_KEY, username)?;
        Ok(())
    }

    pub(crate) fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        self.repo.delete(SESSION_KEY)?;
        Ok(())
    }

    pub(crate) fn save_users(&self) -> Result<()> {
        self.repo.set_json(USERS_KEY, &self.store.users)?;
        Ok(())
    }

    pub(crate) fn save_posts(&self) -> Result<()> {
        self.repo.set_json(POSTS_KEY, &self.store.posts)?;
        Ok(())
    }

    pub(crate) fn save_friends(&self) -> Result<()> {
        self.repo.set_json(FRIENDS_KEY, &self.store.friends)?;
        Ok(())
    }

    pub(crate) fn save_notifications(&self) -> Result<()> {
        self.repo.set_json(NOTIFICATIONS_KEY, &self.store.notifications)?;
        Ok(())
    }

    pub(crate) fn save_conversations(&self) -> Result<()> {
        self.repo.set_json(CONVERSATIONS_KEY, &self.store.conversations)?;
        Ok(())
    }

    pub(crate) fn save_settings(&self) -> Result<()> {
        self.repo.set_json(SETTINGS_KEY, &self.store.settings)?;
        Ok(())
    }
}
