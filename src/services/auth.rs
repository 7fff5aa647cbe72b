//! Authentication service
//!
//! Registration, login and the persisted session. The session is what every
//! ledger command receives as its owner.

use tracing::{info, instrument, warn};

use crate::crypto::{hash_password, verify_password};
use crate::error::{SipadiError, SipadiResult};
use crate::models::{Owner, Session, UserAccount};
use crate::storage::Storage;

/// Service for user accounts and sessions
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    #[instrument(skip(self, password))]
    pub fn register(&self, username: &str, password: &str) -> SipadiResult<UserAccount> {
        let owner = parse_owner(username)?;

        if self.storage.users.exists(&owner)? {
            return Err(SipadiError::duplicate_user(owner.as_str()));
        }

        let user = UserAccount::new(owner, hash_password(password)?);
        self.storage.users.insert(&user)?;

        info!(user = %user.username, "registered user");
        Ok(user)
    }

    /// Verify credentials and start a session
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> SipadiResult<Session> {
        let owner = parse_owner(username)?;

        let user = self
            .storage
            .users
            .find(&owner)?
            .ok_or_else(|| SipadiError::user_not_found(owner.as_str()))?;

        if !verify_password(password, &user.password_hash)? {
            warn!(user = %owner, "login rejected");
            return Err(SipadiError::Authentication(
                "Wrong username or password".into(),
            ));
        }

        let session = Session::start(user.username);
        self.storage.session.save(&session)?;

        info!(user = %session.owner, "logged in");
        Ok(session)
    }

    /// End the current session; returns the owner that was logged in
    pub fn logout(&self) -> SipadiResult<Option<Owner>> {
        let previous = self.storage.session.load()?.map(|s| s.owner);
        self.storage.session.clear()?;
        if let Some(owner) = &previous {
            info!(user = %owner, "logged out");
        }
        Ok(previous)
    }

    /// The active session, if any
    pub fn current_session(&self) -> SipadiResult<Option<Session>> {
        self.storage.session.load()
    }

    /// The active session, or `NotLoggedIn`
    pub fn require_session(&self) -> SipadiResult<Session> {
        self.current_session()?.ok_or(SipadiError::NotLoggedIn)
    }
}

fn parse_owner(username: &str) -> SipadiResult<Owner> {
    Owner::parse(username).map_err(|e| SipadiError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SipadiPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SipadiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_and_login() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);

        auth.register("budi", "sawah123").unwrap();
        let session = auth.login("budi", "sawah123").unwrap();
        assert_eq!(session.owner.as_str(), "budi");
        assert_eq!(auth.require_session().unwrap(), session);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);

        auth.register("budi", "a").unwrap();
        let err = auth.register("budi", "b").unwrap_err();
        assert!(matches!(err, SipadiError::Duplicate { .. }));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);

        auth.register("budi", "benar").unwrap();
        let err = auth.login("budi", "salah").unwrap_err();
        assert!(matches!(err, SipadiError::Authentication(_)));
        assert!(auth.current_session().unwrap().is_none());
    }

    #[test]
    fn test_unknown_user() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);
        assert!(auth.login("joko", "x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_username_and_empty_password() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);
        assert!(auth.register("../root", "x").unwrap_err().is_validation());
        assert!(auth.register("budi", "").unwrap_err().is_validation());
    }

    #[test]
    fn test_logout() {
        let (_temp, storage) = setup();
        let auth = AuthService::new(&storage);

        assert_eq!(auth.logout().unwrap(), None);
        auth.register("siti", "padi").unwrap();
        auth.login("siti", "padi").unwrap();

        let previous = auth.logout().unwrap();
        assert_eq!(previous.map(|o| o.to_string()), Some("siti".to_string()));
        assert!(matches!(
            auth.require_session().unwrap_err(),
            SipadiError::NotLoggedIn
        ));
    }
}
