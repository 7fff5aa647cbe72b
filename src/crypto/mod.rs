//! Password hashing for the user registry

pub mod password;

pub use password::{hash_password, verify_password};
