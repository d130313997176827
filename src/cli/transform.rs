//! One-shot encrypt and decrypt commands
//!
//! Each text argument (or each stdin line when none is given) is transformed
//! independently and printed on its own line.

use std::io::{BufRead, Write};

use clap::Args;
use serde::Serialize;

use crate::audit::SessionRecorder;
use crate::cipher::{CombinedCipher, Direction};
use crate::config::Settings;
use crate::error::{CipherError, CipherResult};

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Strings to transform; reads stdin line by line when omitted
    pub text: Vec<String>,

    /// Rotation key (any integer); falls back to the configured default
    #[arg(short, long, allow_negative_numbers = true)]
    pub rotation: Option<i64>,

    /// Print one JSON object per input instead of bare text
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable result of one transformation
#[derive(Debug, Clone, Serialize)]
pub struct CipherReport {
    pub direction: Direction,
    pub rotation: i64,
    pub input: String,
    pub output: String,
}

/// Pick the rotation from the command line, then from settings
pub fn resolve_rotation(explicit: Option<i64>, settings: &Settings) -> CipherResult<i64> {
    explicit.or(settings.default_rotation).ok_or_else(|| {
        CipherError::InvalidKey(
            "no rotation given; pass --rotation or run 'dumbcrypt config set-rotation'"
                .to_string(),
        )
    })
}

/// Handle `encrypt` / `decrypt`
pub fn handle_transform_command(
    cipher: &CombinedCipher,
    settings: &Settings,
    recorder: &SessionRecorder,
    direction: Direction,
    args: TransformArgs,
) -> CipherResult<()> {
    let rotation = resolve_rotation(args.rotation, settings)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.text.is_empty() {
        let stdin = std::io::stdin();
        let inputs = stdin
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        transform_all(cipher, recorder, direction, rotation, &inputs, args.json, &mut out)
    } else {
        transform_all(cipher, recorder, direction, rotation, &args.text, args.json, &mut out)
    }
}

/// Transform every input in order, stopping at the first rejection
pub fn transform_all<W: Write>(
    cipher: &CombinedCipher,
    recorder: &SessionRecorder,
    direction: Direction,
    rotation: i64,
    inputs: &[String],
    json: bool,
    out: &mut W,
) -> CipherResult<()> {
    for input in inputs {
        let outcome = cipher.apply(direction, input, rotation);
        recorder.record(direction, input, &outcome)?;
        let output = outcome?;

        if json {
            let report = CipherReport {
                direction,
                rotation,
                input: input.clone(),
                output,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", output)?;
        }
    }

    Ok(())
}
