//! User registry
//!
//! Registered users live in one CSV file shared by all owners.

use std::path::PathBuf;

use crate::error::{SipadiError, SipadiResult};
use crate::models::{Owner, UserAccount};

use super::csv_io::{append_records, read_records};

/// Repository for registered users
pub struct UserRepository {
    path: PathBuf,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All registered users
    pub fn get_all(&self) -> SipadiResult<Vec<UserAccount>> {
        read_records(&self.path)
    }

    /// Find a user by name
    pub fn find(&self, username: &Owner) -> SipadiResult<Option<UserAccount>> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|user| &user.username == username))
    }

    /// Check whether a username is taken
    pub fn exists(&self, username: &Owner) -> SipadiResult<bool> {
        Ok(self.find(username)?.is_some())
    }

    /// Register a new user
    pub fn insert(&self, user: &UserAccount) -> SipadiResult<()> {
        if self.exists(&user.username)? {
            return Err(SipadiError::duplicate_user(user.username.as_str()));
        }
        append_records(&self.path, std::slice::from_ref(user))
    }
}
