//! Users, owners and sessions
//!
//! `Owner` is the identity every ledger record is scoped to. Because it also
//! names the owner's files on disk it is restricted to a safe character set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation errors for usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerValidationError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
    LeadingDot,
}

impl fmt::Display for OwnerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong(len) => {
                write!(f, "Username too long ({} chars, max {})", len, Owner::MAX_LEN)
            }
            Self::InvalidCharacter(c) => write!(
                f,
                "Username may only contain letters, digits, '_', '-' and '.' (found {:?})",
                c
            ),
            Self::LeadingDot => write!(f, "Username cannot start with '.'"),
        }
    }
}

impl std::error::Error for OwnerValidationError {}

/// The identity a set of ledger records belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub const MAX_LEN: usize = 32;

    /// Validate and wrap a username
    pub fn parse(s: &str) -> Result<Self, OwnerValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OwnerValidationError::Empty);
        }
        let len = s.chars().count();
        if len > Self::MAX_LEN {
            return Err(OwnerValidationError::TooLong(len));
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err(OwnerValidationError::InvalidCharacter(c));
        }
        if s.starts_with('.') {
            return Err(OwnerValidationError::LeadingDot);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user as stored in the user registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "Username")]
    pub username: Owner,

    /// Argon2 PHC string
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,

    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(username: Owner, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// The logged-in user, passed explicitly to every ledger operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub owner: Owner,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for an owner
    pub fn start(owner: Owner) -> Self {
        Self {
            owner,
            logged_in_at: Utc::now(),
        }
    }
}
