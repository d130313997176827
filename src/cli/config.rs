//! Configuration CLI commands
//!
//! Shows and edits the persisted settings.

use clap::{Subcommand, ValueEnum};

use crate::config::{CipherPaths, Settings};
use crate::error::CipherResult;

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Set the rotation used when `--rotation` is omitted
    SetRotation {
        /// Rotation key (any integer)
        #[arg(allow_negative_numbers = true)]
        rotation: i64,
    },

    /// Forget the default rotation
    ClearRotation,

    /// Turn audit logging on or off
    Audit {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Turn the session banner on or off
    Banner {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Restore default settings
    Reset,
}

/// Handle configuration commands
pub fn handle_config_command(
    paths: &CipherPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> CipherResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_config(paths, settings));
            return Ok(());
        }
        ConfigCommands::SetRotation { rotation } => {
            settings.default_rotation = Some(rotation);
            println!("Default rotation set to {}.", rotation);
        }
        ConfigCommands::ClearRotation => {
            settings.default_rotation = None;
            println!("Default rotation cleared.");
        }
        ConfigCommands::Audit { state } => {
            settings.audit_enabled = state.into();
            println!("Audit logging {}.", on_off(settings.audit_enabled));
        }
        ConfigCommands::Banner { state } => {
            settings.show_banner = state.into();
            println!("Session banner {}.", on_off(settings.show_banner));
        }
        ConfigCommands::Reset => {
            *settings = Settings::default();
            println!("Settings restored to defaults.");
        }
    }

    settings.save(paths)
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Render paths and settings for `config show`
pub fn format_config(paths: &CipherPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("dumbcrypt Configuration\n");
    output.push_str("=======================\n");
    output.push_str(&format!("Config file: {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:   {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!(
        "  Default rotation: {}\n",
        settings
            .default_rotation
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(none)".to_string())
    ));
    output.push_str(&format!("  Audit logging:    {}\n", on_off(settings.audit_enabled)));
    output.push_str(&format!("  Session banner:   {}\n", on_off(settings.show_banner)));
    output.push_str(&format!(
        "  Punctuation:      {}\n",
        settings.alphabets.punctuation
    ));
    output.push_str(&format!(
        "  Alphanumeric:     {}\n",
        settings.alphabets.alphanumeric
    ));
    output
}
