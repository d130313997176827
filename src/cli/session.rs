//! Interactive session
//!
//! Asks for a rotation once, then loops on `e`/`d`/`q` commands until the
//! user quits or input runs out. Cipher rejections are reported and the
//! loop carries on; only I/O and audit failures end the session early.

use std::io::{BufRead, Write};

use clap::Args;

use crate::audit::SessionRecorder;
use crate::cipher::{CombinedCipher, Direction};
use crate::display::{format_banner, BANNER};
use crate::error::{CipherError, CipherResult};

use super::parse_rotation;

/// Options for the interactive session
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Rotation to use instead of prompting for one
    #[arg(short, long, allow_negative_numbers = true)]
    pub rotation: Option<i64>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// What happened during a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rotation in effect, if one was ever given
    pub rotation: Option<i64>,
    pub encrypted: usize,
    pub decrypted: usize,
    pub rejected: usize,
}

/// A single command typed at the session prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Transform(Direction),
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "e" => Some(Command::Transform(Direction::Encrypt)),
            "d" => Some(Command::Transform(Direction::Decrypt)),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Run a session over the real terminal
pub fn handle_session_command(
    cipher: &CombinedCipher,
    recorder: &SessionRecorder,
    show_banner: bool,
    args: SessionArgs,
) -> CipherResult<SessionSummary> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(
        cipher,
        recorder,
        args.rotation,
        show_banner && !args.no_banner,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Run a session reading commands from `input` and writing to `output`
pub fn run_session<R: BufRead, W: Write>(
    cipher: &CombinedCipher,
    recorder: &SessionRecorder,
    rotation: Option<i64>,
    show_banner: bool,
    mut input: R,
    mut output: W,
) -> CipherResult<SessionSummary> {
    let mut summary = SessionSummary::default();

    if show_banner {
        write!(output, "{}", format_banner(BANNER))?;
    }

    let rotation = match rotation {
        Some(n) => n,
        None => match prompt_rotation(&mut input, &mut output)? {
            Some(n) => n,
            None => return Ok(summary),
        },
    };
    summary.rotation = Some(rotation);

    loop {
        write!(output, "\n\nInput a command (e)ncrypt, (d)ecrypt, (q)uit: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let direction = match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Transform(direction)) => direction,
            None => {
                writeln!(output, "\nError; command not recognized.")?;
                continue;
            }
        };

        write!(output, "\nInput a string to {}: ", direction)?;
        output.flush()?;

        let Some(text) = read_line(&mut input)? else {
            break;
        };

        let outcome = cipher.apply(direction, &text, rotation);
        recorder.record(direction, &text, &outcome)?;

        match outcome {
            Ok(result) => {
                let (before, after) = match direction {
                    Direction::Encrypt => ("Plain text", "Cipher text"),
                    Direction::Decrypt => ("Cipher text", "Plain text"),
                };
                writeln!(output, "\n{}: {}", before, text)?;
                writeln!(output, "{}: {}", after, result)?;

                match direction {
                    Direction::Encrypt => summary.encrypted += 1,
                    Direction::Decrypt => summary.decrypted += 1,
                }
            }
            Err(err) => {
                summary.rejected += 1;
                match err {
                    CipherError::UnsupportedCharacter { ch, position } => {
                        writeln!(
                            output,
                            "\nError with character: {:?} at position {}",
                            ch, position
                        )?;
                    }
                    other => writeln!(output, "\nError: {}", other)?,
                }
                writeln!(output, "Cannot {} this string.", direction)?;
            }
        }
    }

    Ok(summary)
}

/// Prompt until an integer is entered; `None` when input runs out first
fn prompt_rotation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CipherResult<Option<i64>> {
    loop {
        write!(output, "Input a rotation (int): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match parse_rotation(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "\nError; rotation must be an integer.")?,
        }
    }
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> CipherResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
