//! Session Manager
//!
//! Single source of truth for who is using this device. The manager owns
//! the session state machine, persists the token and profile across
//! restarts, and is the only component allowed to mutate session state.
//! The gateway reads the token through the [`TokenSource`] seam and reports
//! token rejections back, which demote the session exactly as a logout
//! would.
//!
//! # State machine
//!
//! Uninitialized -> {Unauthenticated, Authenticated} via `initialize`;
//! Unauthenticated -> Authenticated via `login`/`register`;
//! Authenticated -> Unauthenticated via `logout` or a server-side token
//! rejection. Nothing re-enters Uninitialized.

pub mod store;

use crate::client::{ApiClient, TokenSource};
use crate::shared::{
    ClientConfig, ClientError, Credentials, Registration, Role, UserProfile,
};
use std::sync::{Arc, RwLock};

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

/// The locally held proof of identity: token and profile, both-or-neither.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Observable session state
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Startup state before `initialize` has run
    Uninitialized,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Shared cell holding the session record.
///
/// This is the single writer for session state. The gateway holds it only
/// as a [`TokenSource`], giving it a read-once token snapshot and a way to
/// report rejections without ever mutating state directly.
pub struct SessionCell {
    state: RwLock<SessionState>,
    store: Box<dyn SessionStore>,
    persist_error: RwLock<Option<ClientError>>,
}

impl SessionCell {
    fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            state: RwLock::new(SessionState::Uninitialized),
            store,
            persist_error: RwLock::new(None),
        }
    }

    fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_state(&self, next: SessionState) {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }

    /// Transition to Authenticated and persist. A storage failure is
    /// returned for reporting, but the in-memory session stays valid for
    /// the rest of the process lifetime.
    fn set_authenticated(&self, session: Session) -> Result<(), ClientError> {
        let persisted = self.store.save(&session);
        self.set_state(SessionState::Authenticated(session));
        persisted
    }

    /// Transition to Unauthenticated and clear storage. Never fails; a
    /// storage error cannot block a logout.
    fn demote(&self) {
        self.set_state(SessionState::Unauthenticated);
        if let Err(err) = self.store.clear() {
            tracing::warn!("failed to clear persisted session: {}", err);
        }
    }
}

impl TokenSource for SessionCell {
    fn bearer_token(&self) -> Option<String> {
        match &*self.state.read().unwrap_or_else(|e| e.into_inner()) {
            SessionState::Authenticated(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    fn on_unauthorized(&self) {
        tracing::warn!("session token rejected by server, demoting to unauthenticated");
        self.demote();
    }
}

/// Owns authentication flows and the session lifecycle.
///
/// Constructed once at startup and passed explicitly to whatever needs it;
/// there is no ambient global session.
pub struct SessionManager {
    cell: Arc<SessionCell>,
    api: Arc<ApiClient>,
}

impl SessionManager {
    /// Build a manager and its gateway over a shared session cell
    pub fn new(config: ClientConfig, store: Box<dyn SessionStore>) -> Result<Self, ClientError> {
        let cell = Arc::new(SessionCell::new(store));
        let api = Arc::new(ApiClient::new(
            config,
            Arc::clone(&cell) as Arc<dyn TokenSource>,
        )?);
        Ok(Self { cell, api })
    }

    /// The gateway wired to this session. Screens fetch data through this
    /// handle; auth flows stay on the manager.
    pub fn gateway(&self) -> Arc<ApiClient> {
        Arc::clone(&self.api)
    }

    /// Restore a persisted session, if any.
    ///
    /// Always terminates in Unauthenticated or Authenticated; corrupt or
    /// unreadable storage counts as no session. Idempotent after the first
    /// call.
    pub fn initialize(&self) -> SessionState {
        if !matches!(self.cell.snapshot(), SessionState::Uninitialized) {
            return self.cell.snapshot();
        }
        match self.cell.store.load() {
            Ok(Some(session)) => {
                tracing::debug!(user = %session.user.email, "restored persisted session");
                self.cell.set_state(SessionState::Authenticated(session));
            }
            Ok(None) => self.cell.set_state(SessionState::Unauthenticated),
            Err(err) => {
                tracing::warn!("session restore failed, starting unauthenticated: {}", err);
                self.cell.set_state(SessionState::Unauthenticated);
            }
        }
        self.cell.snapshot()
    }

    /// Log in. On success the session is persisted and Authenticated; on
    /// failure the state is untouched and the server's message, when it
    /// sent one, is surfaced.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, ClientError> {
        match self.api.login(credentials).await {
            Ok(response) => {
                let user = response.user.clone();
                self.adopt(Session {
                    token: response.token,
                    user: response.user,
                });
                Ok(user)
            }
            Err(err) => Err(as_authentication(err, "Login failed")),
        }
    }

    /// Register a new account. A successful registration logs the user in.
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, ClientError> {
        match self.api.register(registration).await {
            Ok(response) => {
                let user = response.user.clone();
                self.adopt(Session {
                    token: response.token,
                    user: response.user,
                });
                Ok(user)
            }
            Err(err) => Err(as_authentication(err, "Registration failed")),
        }
    }

    /// Clear the session unconditionally. Storage failures are logged,
    /// never surfaced; logout cannot be blocked.
    pub fn logout(&self) {
        self.cell.demote();
    }

    /// Synchronous snapshot of the current profile
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.cell.snapshot() {
            SessionState::Authenticated(session) => Some(session.user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.snapshot().is_authenticated()
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    /// Advisory role predicate; the server re-enforces every
    /// authorization-sensitive decision.
    pub fn has_role(&self, role: Role) -> bool {
        self.current_user().map(|u| u.role == role).unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_agent(&self) -> bool {
        self.has_role(Role::Agent)
    }

    /// The storage failure from the most recent persistence attempt, if
    /// any. Durability is best-effort: a failed write leaves the
    /// in-memory session fully valid for this process, and this is where
    /// that failure is reported.
    pub fn persistence_error(&self) -> Option<ClientError> {
        self.cell
            .persist_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn adopt(&self, session: Session) {
        let persisted = self.cell.set_authenticated(session);
        if let Err(err) = &persisted {
            tracing::warn!("session valid in memory but not persisted: {}", err);
        }
        let mut guard = self
            .cell
            .persist_error
            .write()
            .unwrap_or_else(|e| e.into_inner());
        *guard = persisted.err();
    }
}

/// Auth flows surface every failure as an authentication error carrying
/// whatever structured body the server sent.
fn as_authentication(err: ClientError, fallback: &str) -> ClientError {
    match err {
        ClientError::Authentication { .. } => err,
        ClientError::Authorization {
            message,
            server_body,
        }
        | ClientError::Transport {
            message,
            server_body,
        } => {
            let message = if message.is_empty() {
                fallback.to_string()
            } else {
                message
            };
            ClientError::Authentication {
                message,
                server_body,
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Id;

    fn sample_user(role: Role) -> UserProfile {
        UserProfile {
            id: Id::from("1"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role,
            phone: None,
        }
    }

    fn manager_with_store(store: Box<dyn SessionStore>) -> SessionManager {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        SessionManager::new(config, store).unwrap()
    }

    #[test]
    fn test_initialize_restores_session() {
        let store = MemorySessionStore::with_session(Session {
            token: "abc".to_string(),
            user: sample_user(Role::Agent),
        });
        let manager = manager_with_store(Box::new(store));

        let state = manager.initialize();
        assert!(state.is_authenticated());
        assert!(manager.is_agent());
        assert!(!manager.is_admin());
        assert_eq!(manager.current_user().unwrap().id, Id::from("1"));
    }

    #[test]
    fn test_initialize_empty_store() {
        let manager = manager_with_store(Box::new(MemorySessionStore::new()));
        let state = manager.initialize();
        assert!(!state.is_authenticated());
        assert!(manager.current_user().is_none());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = MemorySessionStore::with_session(Session {
            token: "abc".to_string(),
            user: sample_user(Role::User),
        });
        let manager = manager_with_store(Box::new(store));
        manager.initialize();
        manager.logout();

        // A second initialize must not resurrect the cleared session.
        let state = manager.initialize();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_logout_clears_state_and_store() {
        let store = MemorySessionStore::with_session(Session {
            token: "abc".to_string(),
            user: sample_user(Role::User),
        });
        let manager = manager_with_store(Box::new(store));
        manager.initialize();
        assert!(manager.is_authenticated());

        manager.logout();
        assert!(!manager.is_authenticated());
        assert!(manager.cell.store.load().unwrap().is_none());
    }

    #[test]
    fn test_token_rejection_demotes() {
        let store = MemorySessionStore::with_session(Session {
            token: "expired".to_string(),
            user: sample_user(Role::User),
        });
        let manager = manager_with_store(Box::new(store));
        manager.initialize();

        manager.cell.on_unauthorized();
        assert!(!manager.is_authenticated());
        assert!(manager.cell.bearer_token().is_none());
    }

    /// Store whose writes always fail, as a full disk would behave.
    struct FailingSaveStore;

    impl SessionStore for FailingSaveStore {
        fn load(&self) -> Result<Option<Session>, ClientError> {
            Ok(None)
        }

        fn save(&self, _session: &Session) -> Result<(), ClientError> {
            Err(ClientError::storage("disk full"))
        }

        fn clear(&self) -> Result<(), ClientError> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_persistence_keeps_in_memory_session() {
        let manager = manager_with_store(Box::new(FailingSaveStore));
        manager.initialize();

        manager.adopt(Session {
            token: "tok-1".to_string(),
            user: sample_user(Role::User),
        });

        assert!(manager.is_authenticated());
        assert_eq!(manager.current_user().unwrap().email, "ada@example.com");
        assert_matches::assert_matches!(
            manager.persistence_error(),
            Some(ClientError::Storage { .. })
        );
    }

    #[test]
    fn test_persistence_error_cleared_on_successful_save() {
        let manager = manager_with_store(Box::new(MemorySessionStore::new()));
        manager.initialize();
        manager.adopt(Session {
            token: "tok-1".to_string(),
            user: sample_user(Role::User),
        });
        assert!(manager.persistence_error().is_none());
    }

    #[test]
    fn test_as_authentication_keeps_server_message() {
        let err = ClientError::Transport {
            message: "Invalid credentials".to_string(),
            server_body: Some(serde_json::json!({"message": "Invalid credentials"})),
        };
        match as_authentication(err, "Login failed") {
            ClientError::Authentication {
                message,
                server_body,
            } => {
                assert_eq!(message, "Invalid credentials");
                assert!(server_body.is_some());
            }
            other => panic!("Expected Authentication, got {:?}", other),
        }
    }
}
