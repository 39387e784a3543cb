//! Durable Session Storage
//!
//! The session survives process restarts through exactly two keys: the
//! opaque bearer token and the serialized user profile. Both are written
//! together on a successful login and cleared together on logout.
//!
//! Corrupt or unreadable data always loads as "no session"; startup must
//! never fail because the store rotted on disk.

use super::Session;
use crate::shared::{ClientError, UserProfile};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

/// Durable two-key store for the session record.
pub trait SessionStore: Send + Sync {
    /// Load the persisted session. A partial or corrupt record loads as
    /// `None`, never as an error the caller has to recover from.
    fn load(&self) -> Result<Option<Session>, ClientError>;

    /// Persist token and profile together
    fn save(&self, session: &Session) -> Result<(), ClientError>;

    /// Remove both keys
    fn clear(&self) -> Result<(), ClientError>;
}

/// File-backed store: one file per key under a per-user data directory.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Store under the platform data directory (`<data_dir>/homesphere`)
    pub fn new() -> Result<Self, ClientError> {
        let base = dirs::data_dir()
            .ok_or_else(|| ClientError::storage("No platform data directory available"))?;
        Ok(Self {
            dir: base.join("homesphere"),
        })
    }

    /// Store under an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn remove_ignoring_missing(path: &Path) -> Result<(), ClientError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ClientError> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(token) if !token.trim().is_empty() => token.trim().to_string(),
            Ok(_) => return Ok(None),
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                tracing::warn!("unreadable token file, treating session as absent: {}", err);
                return Ok(None);
            }
        };
        let user_raw = match fs::read_to_string(self.user_path()) {
            Ok(raw) => raw,
            Err(_) => return Ok(None),
        };
        match serde_json::from_str::<UserProfile>(&user_raw) {
            Ok(user) => Ok(Some(Session { token, user })),
            Err(err) => {
                tracing::warn!("corrupt user record, treating session as absent: {}", err);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| ClientError::storage(format!("Failed to create store dir: {}", err)))?;
        let user_json = serde_json::to_string(&session.user)
            .map_err(|err| ClientError::storage(format!("Failed to encode profile: {}", err)))?;

        fs::write(self.token_path(), &session.token)
            .map_err(|err| ClientError::storage(format!("Failed to write token: {}", err)))?;
        if let Err(err) = fs::write(self.user_path(), user_json) {
            // Half a session must never persist; drop the token too.
            let _ = Self::remove_ignoring_missing(&self.token_path());
            return Err(ClientError::storage(format!(
                "Failed to write profile: {}",
                err
            )));
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let token = Self::remove_ignoring_missing(&self.token_path());
        let user = Self::remove_ignoring_missing(&self.user_path());
        token.and(user)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, as a restored device would see it
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, ClientError> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
