//! The persisted login session

use std::path::PathBuf;

use crate::error::SipadiResult;
use crate::models::Session;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Stores at most one active session
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The active session, if anyone is logged in
    pub fn load(&self) -> SipadiResult<Option<Session>> {
        read_json(&self.path)
    }

    pub fn save(&self, session: &Session) -> SipadiResult<()> {
        write_json_atomic(&self.path, session)
    }

    /// End the active session
    pub fn clear(&self) -> SipadiResult<()> {
        remove_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;
    use tempfile::TempDir;

    #[test]
    fn test_session_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());

        let session = Session::start(Owner::parse("budi").unwrap());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
