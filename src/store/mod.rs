//! Session & identity store.
//!
//! Holds the user registry (username → [`UserRecord`]) and the refresh
//! session table (opaque token → [`RefreshSession`]) behind async `RwLock`s.
//! Access tokens are JWTs and are not stored.
//!
//! When a [`StateFile`] is configured the full state is loaded on open and
//! rewritten after every mutation. Write failures are logged and do not fail
//! the request.

pub mod models;
pub mod snapshot;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, Utc};
use devicegate_auth::Role;
use devicegate_config::StoreConfig;
use devicegate_core::AppError;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

pub use models::{NewUser, RefreshSession, UserRecord};
pub use snapshot::{PersistedState, StateFile};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username `{0}` is already registered")]
    Conflict(String),
    #[error("state file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    pub fn into_app_error(self) -> AppError {
        match self {
            StoreError::Conflict(_) => AppError::conflict(self.to_string()),
            other => AppError::internal(other),
        }
    }
}

#[derive(Debug, Default)]
pub struct IdentityStore {
    users: RwLock<HashMap<String, UserRecord>>,
    refresh_tokens: RwLock<HashMap<String, RefreshSession>>,
    state_file: Option<StateFile>,
}

impl IdentityStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store described by `config`, loading the state file if one
    /// is configured.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let Some(path) = &config.state_file else {
            return Ok(Self::in_memory());
        };

        let file = StateFile::new(path);
        let state = file.load().await?;
        info!(
            path = %file.path().display(),
            users = state.users.len(),
            refresh_tokens = state.refresh_tokens.len(),
            "Loaded identity state"
        );

        let users = state
            .users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();

        Ok(Self {
            users: RwLock::new(users),
            refresh_tokens: RwLock::new(state.refresh_tokens),
            state_file: Some(file),
        })
    }

    /// Inserts a new user with the `viewer` role.
    ///
    /// The existence check and the insert happen under one write lock.
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    pub async fn register_user(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        let record = {
            let mut users = self.users.write().await;
            match users.entry(new_user.username.clone()) {
                Entry::Occupied(_) => return Err(StoreError::Conflict(new_user.username)),
                Entry::Vacant(slot) => slot
                    .insert(UserRecord {
                        username: new_user.username,
                        email: new_user.email,
                        password_hash: new_user.password_hash,
                        role: Role::Viewer,
                        created_at: Utc::now(),
                    })
                    .clone(),
            }
        };

        self.persist().await;
        Ok(record)
    }

    pub async fn find_user(&self, username: &str) -> Option<UserRecord> {
        self.users.read().await.get(username).cloned()
    }

    /// Stores a new refresh session, dropping every session that has expired
    /// by the time the new one was issued.
    pub async fn insert_refresh_token(&self, token: String, session: RefreshSession) {
        {
            let mut sessions = self.refresh_tokens.write().await;
            let now = session.issued_at;
            sessions.retain(|_, existing| !existing.is_expired_at(now));
            sessions.insert(token, session);
        }
        self.persist().await;
    }

    /// Looks up a refresh session. Expired sessions are evicted and reported
    /// as absent.
    pub async fn find_refresh_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Option<RefreshSession> {
        let session = self.refresh_tokens.read().await.get(token).cloned()?;
        if !session.is_expired_at(now) {
            return Some(session);
        }

        let evicted = {
            let mut sessions = self.refresh_tokens.write().await;
            // Re-check under the write lock: the token may have been removed meanwhile.
            match sessions.get(token) {
                Some(current) if current.is_expired_at(now) => sessions.remove(token).is_some(),
                _ => false,
            }
        };
        if evicted {
            self.persist().await;
        }
        None
    }

    /// Removes `token` if it belongs to `owner`. Returns whether a session
    /// was removed.
    pub async fn revoke_refresh_token(&self, token: &str, owner: &str) -> bool {
        let removed = {
            let mut sessions = self.refresh_tokens.write().await;
            match sessions.get(token) {
                Some(session) if session.username == owner => sessions.remove(token).is_some(),
                _ => false,
            }
        };

        if removed {
            self.persist().await;
        }
        removed
    }

    pub async fn snapshot(&self) -> PersistedState {
        let users = self.users.read().await.values().cloned().collect();
        let refresh_tokens = self.refresh_tokens.read().await.clone();
        PersistedState {
            users,
            refresh_tokens,
        }
    }

    async fn persist(&self) {
        let Some(file) = &self.state_file else {
            return;
        };

        let _guard = file.lock().await;
        let state = self.snapshot().await;
        if let Err(e) = file.write(&state).await {
            warn!(path = %file.path().display(), error = %e, "Failed to write state file");
        }
    }
}
