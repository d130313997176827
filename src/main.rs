use anyhow::Result;
use clap::{Parser, Subcommand};

use dumbcrypt::audit::{AuditLogger, SessionRecorder};
use dumbcrypt::cipher::Direction;
use dumbcrypt::cli::{
    handle_config_command, handle_history_command, handle_inspect_command,
    handle_session_command, handle_transform_command, ConfigCommands, HistoryArgs, SessionArgs,
    TransformArgs,
};
use dumbcrypt::config::{paths::CipherPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "dumbcrypt",
    author = "Kaylee Beyene",
    version,
    about = "Combined affine and Caesar cipher for the terminal",
    long_about = "dumbcrypt encrypts letters and digits with an affine cipher and \
                  punctuation with a Caesar shift, both keyed by one integer rotation. \
                  It is an educational toy, not a secure cipher. Spaces are not supported."
)]
struct Cli {
    /// Do not record this run in the audit log
    #[arg(long, global = true)]
    no_audit: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    #[command(alias = "i")]
    Session(SessionArgs),

    /// Encrypt strings
    #[command(alias = "e")]
    Encrypt(TransformArgs),

    /// Decrypt strings
    #[command(alias = "d")]
    Decrypt(TransformArgs),

    /// Show the alphabets and the affine parameters derived from them
    Inspect,

    /// Show recent operations from the audit log
    History(HistoryArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CipherPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let logger =
        (settings.audit_enabled && !cli.no_audit).then(|| AuditLogger::new(paths.audit_log()));
    let recorder = SessionRecorder::new(logger);

    match cli.command {
        None => {
            let cipher = settings.cipher()?;
            let args = SessionArgs::default();
            handle_session_command(&cipher, &recorder, settings.show_banner, args)?;
        }
        Some(Commands::Session(args)) => {
            let cipher = settings.cipher()?;
            handle_session_command(&cipher, &recorder, settings.show_banner, args)?;
        }
        Some(Commands::Encrypt(args)) => {
            let cipher = settings.cipher()?;
            handle_transform_command(&cipher, &settings, &recorder, Direction::Encrypt, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            let cipher = settings.cipher()?;
            handle_transform_command(&cipher, &settings, &recorder, Direction::Decrypt, args)?;
        }
        Some(Commands::Inspect) => {
            let cipher = settings.cipher()?;
            handle_inspect_command(&cipher)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&paths, args)?;
        }
        Some(Commands::Config { action }) => {
            let action = action.unwrap_or(ConfigCommands::Show);
            handle_config_command(&paths, &mut settings, action)?;
        }
    }

    Ok(())
}
