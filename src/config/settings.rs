//! User settings for dumbcrypt
//!
//! Manages the default rotation, audit logging, banner display and the two
//! alphabets the cipher is built from.

use serde::{Deserialize, Serialize};

use super::paths::CipherPaths;
use crate::cipher::{Alphabet, CombinedCipher, ALPHANUMERIC, PUNCTUATION};
use crate::error::CipherError;

/// Alphabets the cipher is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetSettings {
    /// Characters routed through the shift transform
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Characters routed through the affine transform (lowercase)
    #[serde(default = "default_alphanumeric")]
    pub alphanumeric: String,
}

fn default_punctuation() -> String {
    PUNCTUATION.to_string()
}

fn default_alphanumeric() -> String {
    ALPHANUMERIC.to_string()
}

impl Default for AlphabetSettings {
    fn default() -> Self {
        Self {
            punctuation: default_punctuation(),
            alphanumeric: default_alphanumeric(),
        }
    }
}

/// User settings for dumbcrypt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rotation used by one-shot commands when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rotation: Option<i64>,

    /// Whether operations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether the interactive session opens with the banner
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Alphabet configuration
    #[serde(default)]
    pub alphabets: AlphabetSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_rotation: None,
            audit_enabled: true,
            show_banner: true,
            alphabets: AlphabetSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CipherPaths) -> Result<Self, CipherError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CipherError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CipherError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CipherPaths) -> Result<(), CipherError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CipherError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CipherError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Build the cipher described by the configured alphabets
    pub fn cipher(&self) -> Result<CombinedCipher, CipherError> {
        let punctuation = Alphabet::new(&self.alphabets.punctuation)
            .map_err(|e| CipherError::Config(format!("punctuation alphabet: {}", e)))?;
        let alphanumeric = Alphabet::new(&self.alphabets.alphanumeric)
            .map_err(|e| CipherError::Config(format!("alphanumeric alphabet: {}", e)))?;

        CombinedCipher::new(punctuation, alphanumeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_rotation, None);
        assert!(settings.audit_enabled);
        assert!(settings.show_banner);
        assert_eq!(settings.alphabets.alphanumeric, ALPHANUMERIC);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_rotation = Some(-7);
        settings.audit_enabled = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_rotation, Some(-7));
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_rotation": 4}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_rotation, Some(4));
        assert!(settings.audit_enabled);
        assert_eq!(settings.alphabets, AlphabetSettings::default());
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CipherError::Config(_)));
    }

    #[test]
    fn test_default_cipher() {
        let cipher = Settings::default().cipher().unwrap();
        assert_eq!(cipher.affine_params().multiplier, 5);
        assert_eq!(cipher.encrypt("a", 3).unwrap(), "d");
    }

    #[test]
    fn test_invalid_alphabet_rejected() {
        let mut settings = Settings::default();
        settings.alphabets.alphanumeric = "aab".to_string();

        let err = settings.cipher().unwrap_err();
        assert!(err.to_string().contains("alphanumeric alphabet"));
    }

    #[test]
    fn test_overlapping_alphabets_rejected() {
        let mut settings = Settings::default();
        settings.alphabets.punctuation = "!a".to_string();
        settings.alphabets.alphanumeric = "abcde".to_string();

        let err = settings.cipher().unwrap_err();
        assert!(matches!(err, CipherError::InvalidAlphabet(_)));
    }
}
