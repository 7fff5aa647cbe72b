//! Storage layer for SiPadi
//!
//! Ledger records are CSV files partitioned by owner; settings and the
//! session are small JSON files written atomically.

pub mod book;
pub mod csv_io;
pub mod file_io;
pub mod init;
pub mod session;
pub mod users;

pub use book::Book;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use session::SessionStore;
pub use users::UserRepository;

use crate::config::paths::SipadiPaths;
use crate::error::SipadiError;
use crate::models::Owner;

/// Main storage coordinator
pub struct Storage {
    paths: SipadiPaths,
    pub users: UserRepository,
    pub session: SessionStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SipadiPaths) -> Result<Self, SipadiError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            session: SessionStore::new(paths.session_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SipadiPaths {
        &self.paths
    }

    /// Open an owner's book
    pub fn book(&self, owner: &Owner) -> Book {
        Book::new(&self.paths, owner.clone())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
