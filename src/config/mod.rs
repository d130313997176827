//! Configuration module for dumbcrypt
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Alphabet configuration

pub mod paths;
pub mod settings;

pub use paths::CipherPaths;
pub use settings::{AlphabetSettings, Settings};
