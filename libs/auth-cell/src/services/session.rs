use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use shared_models::auth::{Role, Session, User};
use shared_utils::storage::{load_from_storage, save_to_storage, KeyValueStorage, StorageError};

use crate::error::AuthError;

pub const SESSION_STORAGE_KEY: &str = "booking_app_auth";

/// On-disk shape of a session. `isAuthenticated` is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    token: Option<String>,
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        let token = persisted.token.filter(|t| !t.is_empty());
        Session {
            is_authenticated: token.is_some(),
            user: persisted.user,
            token,
        }
    }
}

/// Owner of the client session. State changes are persisted first and then
/// broadcast to every subscriber.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    state: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (state, _) = watch::channel(Session::logged_out());
        Self { storage, state }
    }

    /// Load the persisted session. Anything unreadable counts as logged out
    /// and the bad entry is dropped.
    pub fn restore(storage: Arc<dyn KeyValueStorage>) -> Self {
        let store = Self::new(storage);

        let session = match load_from_storage::<PersistedSession>(store.storage.as_ref(), SESSION_STORAGE_KEY) {
            Ok(Some(persisted)) => Session::from(persisted),
            Ok(None) => Session::logged_out(),
            Err(StorageError::Corrupt { reason, .. }) => {
                warn!("Failed to parse auth from storage: {}", reason);
                if let Err(e) = store.storage.remove_item(SESSION_STORAGE_KEY) {
                    warn!("Could not remove corrupt auth entry: {}", e);
                }
                Session::logged_out()
            }
            Err(e) => {
                warn!("Could not read auth from storage: {}", e);
                Session::logged_out()
            }
        };

        if session.is_authenticated {
            debug!("Restored session for {:?}", session.user.as_ref().map(|u| &u.id));
        }

        store.state.send_replace(session);
        store
    }

    pub fn login(&self, user: User, token: String) -> Result<Session, AuthError> {
        let session = Session::logged_in(user, token);
        self.persist(&session)?;

        info!("Session started for {:?}", session.user.as_ref().map(|u| &u.id));
        self.state.send_replace(session.clone());
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;
        self.state.send_replace(Session::logged_out());

        info!("Session ended");
        Ok(())
    }

    /// Swap the cached user after a profile edit, keeping the token.
    pub fn update_user(&self, user: User) -> Result<Session, AuthError> {
        let current = self.current();
        let token = current.token.ok_or(AuthError::NotLoggedIn)?;
        self.login(user, token)
    }

    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn require_token(&self) -> Result<String, AuthError> {
        self.token().ok_or(AuthError::NotLoggedIn)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().has_role(role)
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        match &session.token {
            Some(_) => save_to_storage(
                self.storage.as_ref(),
                SESSION_STORAGE_KEY,
                &PersistedSession {
                    user: session.user.clone(),
                    token: session.token.clone(),
                },
            ),
            None => self.storage.remove_item(SESSION_STORAGE_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_utils::storage::MemoryStorage;
    use shared_utils::test_utils::TestUser;

    #[test]
    fn test_fresh_store_is_logged_out() {
        let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
        assert!(!store.is_authenticated());
        assert_eq!(store.current(), Session::logged_out());
    }

    #[test]
    fn test_login_persists_user_and_token() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::restore(storage.clone());
        let user = TestUser::patient("p@example.com");

        store.login(user.to_user(), user.token()).unwrap();

        let raw = storage.get_item(SESSION_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["token"], user.token());
        assert_eq!(value["user"]["email"], "p@example.com");
        assert!(value.get("isAuthenticated").is_none());

        let restored = SessionStore::restore(storage);
        assert!(restored.is_authenticated());
        assert!(restored.has_role(Role::User));
        assert_eq!(restored.token(), Some(user.token()));
    }

    #[test]
    fn test_corrupt_entry_is_discarded() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(SESSION_STORAGE_KEY, "{\"user\": oops").unwrap();

        let store = SessionStore::restore(storage.clone());

        assert!(!store.is_authenticated());
        assert_eq!(storage.get_item(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_stored_entry_without_token_is_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(SESSION_STORAGE_KEY, "{\"user\": null, \"token\": \"\"}").unwrap();

        let store = SessionStore::restore(storage);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_storage_and_notifies() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::restore(storage.clone());
        let mut rx = store.subscribe();
        let user = TestUser::doctor("d@example.com");

        store.login(user.to_user(), user.token()).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated);

        store.logout().unwrap();
        assert!(!rx.borrow_and_update().is_authenticated);
        assert_eq!(storage.get_item(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_user_keeps_token() {
        let store = SessionStore::restore(Arc::new(MemoryStorage::new()));
        let user = TestUser::patient("p@example.com");

        assert_matches!(store.update_user(user.to_user()), Err(AuthError::NotLoggedIn));

        store.login(user.to_user(), user.token()).unwrap();
        let mut updated = user.to_user();
        updated.first_name = "Renamed".into();

        let session = store.update_user(updated).unwrap();
        assert_eq!(session.token, Some(user.token()));
        assert_eq!(store.current().user.unwrap().first_name, "Renamed");
    }
}
