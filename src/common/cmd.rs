//! Child-process helpers with consistent error reporting.
//!
//! Output is always captured rather than inherited so the spinner owns the
//! terminal while a child runs; on failure the captured stderr is folded
//! into the returned error.

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};
use log::debug;

/// Runs a command and returns its trimmed stdout.
pub fn run(program: &str, args: &[&str], context: &str) -> Result<String> {
    debug!("running: {program} {}", args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {context}"))?;
    require_success(&output, context)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Runs a command with `dir` as its working directory.
pub fn run_in(dir: &Path, program: &str, args: &[&str], context: &str) -> Result<String> {
    debug!("running in {}: {program} {}", dir.display(), args.join(" "));
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run {context}"))?;
    require_success(&output, context)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Whether a command can be spawned and exits zero. Output is discarded, and
/// a command that cannot be spawned at all counts as a plain `false`.
pub fn succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn require_success(output: &Output, context: &str) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    bail!("{context} failed: {}", error_text(output));
}

/// Prefers stderr, falls back to stdout if stderr is empty.
fn error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
