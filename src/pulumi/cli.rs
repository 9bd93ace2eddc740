//! Thin wrapper around the external `pulumi` executable
//!
//! The tool only ever drives two subcommands: `pulumi stack select <name>` to
//! perform a switch, and `pulumi stack --show-name` to ask which stack is
//! currently selected. Both treat the executable as an opaque black box
//! resolved through the search path.

use std::io;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

const PULUMI_BIN: &str = "pulumi";

#[derive(Error, Debug)]
pub enum PulumiError {
    #[error("failed to run pulumi: {0}")]
    Spawn(#[source] io::Error),
    #[error("pulumi exited with {0}")]
    Failed(ExitStatus),
}

/// Runs `pulumi stack select <name>` with this process's stdio attached.
///
/// The child may prompt or print progress; all of it goes straight to the
/// user's terminal. Blocks until the child exits, with no timeout.
pub fn select_stack(name: &str) -> Result<(), PulumiError> {
    debug!(stack = name, "invoking pulumi stack select");

    let status = Command::new(PULUMI_BIN)
        .args(["stack", "select", name])
        .status()
        .map_err(PulumiError::Spawn)?;

    if !status.success() {
        return Err(PulumiError::Failed(status));
    }
    Ok(())
}

/// Returns the currently selected stack, or `None` when it cannot be
/// determined.
///
/// Best-effort by design: a missing executable, a non-zero exit, or empty
/// output all mean "unknown", never an error.
pub fn current_stack() -> Option<String> {
    let output = match Command::new(PULUMI_BIN)
        .args(["stack", "--show-name"])
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            debug!(error = %err, "active stack query failed to run");
            return None;
        }
    };

    if !output.status.success() {
        debug!(status = %output.status, "active stack query failed");
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
