//! stackswitch - switch between Pulumi stacks with ease
//!
//! This library backs the `stackswitch` binary. It detects the stacks of a
//! Pulumi project by scanning the working directory for
//! `Pulumi.<stack-name>.yaml` marker files, and delegates the actual switch
//! to the `pulumi` executable.
//!
//! # Core Concepts
//!
//! - **Detection**: a fresh, non-recursive directory scan on every
//!   invocation; nothing is cached and the marker files are never parsed
//! - **Switching**: `pulumi stack select` runs with the caller's terminal
//!   attached, so prompts and progress pass straight through
//! - **Active stack**: queried best-effort from `pulumi stack --show-name`;
//!   an answer may be unavailable, which is not an error
//!
//! # Example Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn pick_first_stack(dir: &Path) -> Result<(), stackswitch::DetectError> {
//!     let stacks = stackswitch::detect(dir)?;
//!     if let Some(stack) = stacks.first() {
//!         println!("would switch to {stack}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`stacks`]: marker-file detection and prefix filtering
//! - [`pulumi`]: thin wrapper around the external `pulumi` executable
//! - [`cli`]: argument surface and command handlers

// Public modules
pub mod cli;
pub mod pulumi;
pub mod stacks;

// Re-export key types for convenient access
pub use pulumi::{current_stack, select_stack, PulumiError};
pub use stacks::{detect, detect_in_current_dir, filter_by_prefix, has_project_marker, DetectError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
