//! Configuration module for SiPadi
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SipadiPaths;
pub use settings::{DefaultRange, Settings};
