use crate::error::StorageError;

/// Flat string store holding the signed-in sender between page loads.
pub trait IdentityStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, identity: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn(String),
}

impl Session {
    /// Picks the startup identity. A value carried back by the login
    /// redirect wins and is persisted; otherwise whatever was persisted
    /// earlier is used.
    ///
    /// Storage failures are logged and never block sign-in: a redirect
    /// identity that could not be saved is still adopted for this page.
    pub fn resolve<S: IdentityStore>(redirect: Option<&str>, store: &S) -> Self {
        if let Some(identity) = redirect.filter(|identity| !identity.is_empty()) {
            tracing::debug!(%identity, "identity from login redirect");
            if let Err(e) = store.save(identity) {
                tracing::warn!("failed to persist identity: {e}");
            }
            return Session::LoggedIn(identity.to_string());
        }

        match store.load() {
            Ok(Some(identity)) if !identity.is_empty() => {
                tracing::debug!(%identity, "identity from storage");
                Session::LoggedIn(identity)
            }
            Ok(_) => Session::LoggedOut,
            Err(e) => {
                tracing::warn!("failed to read stored identity: {e}");
                Session::LoggedOut
            }
        }
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            Session::LoggedIn(identity) => Some(identity),
            Session::LoggedOut => None,
        }
    }

    pub fn logout<S: IdentityStore>(&mut self, store: &S) {
        if let Err(e) = store.clear() {
            tracing::warn!("failed to clear stored identity: {e}");
        }
        *self = Session::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        broken: bool,
    }

    impl MemoryStore {
        fn with(identity: &str) -> Self {
            Self {
                value: RefCell::new(Some(identity.to_string())),
                broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                value: RefCell::new(None),
                broken: true,
            }
        }

        fn check(&self) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError("quota exceeded".to_string()));
            }
            Ok(())
        }
    }

    impl IdentityStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            self.check()?;
            Ok(self.value.borrow().clone())
        }

        fn save(&self, identity: &str) -> Result<(), StorageError> {
            self.check()?;
            *self.value.borrow_mut() = Some(identity.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            self.check()?;
            *self.value.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn test_nothing_to_resolve() {
        let store = MemoryStore::default();
        let session = Session::resolve(None, &store);
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.identity(), None);
    }

    #[test]
    fn test_redirect_is_persisted() {
        let store = MemoryStore::with("old@gmail.com");
        let session = Session::resolve(Some("alice@gmail.com"), &store);

        assert_eq!(session.identity(), Some("alice@gmail.com"));
        assert_eq!(store.load().unwrap().as_deref(), Some("alice@gmail.com"));
    }

    #[test]
    fn test_stored_identity_is_adopted() {
        let store = MemoryStore::with("alice@gmail.com");
        let session = Session::resolve(None, &store);
        assert_eq!(session, Session::LoggedIn("alice@gmail.com".to_string()));
    }

    #[test]
    fn test_empty_redirect_falls_back_to_storage() {
        let store = MemoryStore::with("alice@gmail.com");
        let session = Session::resolve(Some(""), &store);
        assert_eq!(session.identity(), Some("alice@gmail.com"));
    }

    #[test]
    fn test_logout_clears_store() {
        let store = MemoryStore::with("alice@gmail.com");
        let mut session = Session::resolve(None, &store);

        session.logout(&store);

        assert_eq!(session, Session::LoggedOut);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(Session::resolve(None, &store), Session::LoggedOut);
    }

    #[test]
    fn test_broken_storage() {
        let store = MemoryStore::broken();
        assert_eq!(Session::resolve(None, &store), Session::LoggedOut);

        let mut session = Session::resolve(Some("alice@gmail.com"), &store);
        assert_eq!(session.identity(), Some("alice@gmail.com"));

        session.logout(&store);
        assert_eq!(session, Session::LoggedOut);
    }
}
