//! Path management for dumbcrypt
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `DUMBCRYPT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dumbcrypt` or `~/.config/dumbcrypt`
//! 3. Windows: `%APPDATA%\dumbcrypt`

use std::path::PathBuf;

use crate::error::CipherError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DUMBCRYPT_DATA_DIR";

/// Manages all paths used by dumbcrypt
#[derive(Debug, Clone)]
pub struct CipherPaths {
    /// Base directory for all dumbcrypt files
    base_dir: PathBuf,
}

impl CipherPaths {
    /// Create a new CipherPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, CipherError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CipherPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/dumbcrypt/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CipherError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CipherError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CipherError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                CipherError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("dumbcrypt"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CipherError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CipherError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("dumbcrypt"))
}
