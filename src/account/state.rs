//! Session Aggregate
//!
//! Holds the mock authenticated identity. Login and registration succeed
//! unconditionally; the password is accepted, dropped, and never stored.
//! The identity persists under [`SESSION_KEY`] across reloads; there is no
//! logout path.

use super::models::User;
use crate::storage::{SharedStorage, SESSION_KEY};

/// The session aggregate.
pub struct Session {
    user: Option<User>,
    storage: SharedStorage,
}

impl Session {
    /// Rehydrates the session from storage, or starts signed out.
    pub fn load(storage: SharedStorage) -> Self {
        let user = storage
            .get(SESSION_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt session snapshot, starting signed out");
                    None
                }
            });

        Self { user, storage }
    }

    /// Mock login: derives the display name from the email's local part,
    /// stores and persists the identity.
    pub fn login(&mut self, email: &str, _password: &str) -> User {
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.sign_in(User {
            email: email.to_string(),
            name,
        })
    }

    /// Mock registration: stores the identity exactly as given.
    pub fn register(&mut self, name: &str, email: &str, _password: &str) -> User {
        self.sign_in(User {
            email: email.to_string(),
            name: name.to_string(),
        })
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    fn sign_in(&mut self, user: User) -> User {
        self.user = Some(user.clone());
        self.persist();
        user
    }

    fn persist(&self) {
        match serde_json::to_string(&self.user) {
            Ok(raw) => self.storage.set(SESSION_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "could not serialize session snapshot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage};
    use std::sync::Arc;

    fn memory() -> SharedStorage {
        Arc::new(MemoryStorage::new())
    }

    #[test]
    fn login_derives_name_from_email_local_part() {
        let mut session = Session::load(memory());
        let user = session.login("ada@example.com", "whatever");

        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(session.is_signed_in());
    }

    #[test]
    fn register_keeps_the_given_name() {
        let mut session = Session::load(memory());
        let user = session.register("Ada Lovelace", "ada@example.com", "whatever");

        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(session.current(), Some(&user));
    }

    #[test]
    fn identity_survives_a_reload() {
        let storage = memory();

        let mut session = Session::load(Arc::clone(&storage));
        session.login("ada@example.com", "pw");

        let reloaded = Session::load(storage);
        assert_eq!(reloaded.current().map(|u| u.name.as_str()), Some("ada"));
    }

    #[test]
    fn corrupt_session_snapshot_loads_as_signed_out() {
        let storage = memory();
        storage.set(SESSION_KEY, "{{{");

        let session = Session::load(storage);
        assert!(!session.is_signed_in());
    }
}
