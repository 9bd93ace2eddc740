//! Command handlers
//!
//! Each handler maps a parsed command to a process exit code: 0 on success,
//! 1 on any reported error. User-facing output goes to stdout, errors to
//! stderr, diagnostics to the tracing layer.

use crate::cli::commands::CliArgs;
use crate::pulumi;
use crate::stacks::detector;
use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::path::Path;
use tracing::debug;

/// Appended to the generated bash script so the first positional completes
/// stack names via the hidden `__complete` request.
const BASH_DYNAMIC_COMPLETION: &str = r#"
_stackswitch_stacks() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    if [[ ${COMP_CWORD} -eq 1 && ${cur} != -* ]]; then
        local candidates
        if candidates=$(stackswitch __complete "${cur}" 2>/dev/null); then
            COMPREPLY=($(compgen -W "${candidates}" -- "${cur}"))
            return 0
        fi
    fi
    _stackswitch "$@"
}

complete -F _stackswitch_stacks -o bashdefault -o default stackswitch
"#;

/// Zsh counterpart of [`BASH_DYNAMIC_COMPLETION`].
const ZSH_DYNAMIC_COMPLETION: &str = r#"
_stackswitch_stacks() {
    if (( CURRENT == 2 )) && [[ ${words[CURRENT]} != -* ]]; then
        local -a stacks
        stacks=(${(f)"$(stackswitch __complete "${words[CURRENT]}" 2>/dev/null)"})
        if (( ${#stacks} )); then
            compadd -a stacks
            return 0
        fi
    fi
    _stackswitch "$@"
}

compdef _stackswitch_stacks stackswitch
"#;

/// Lists available stacks, or switches to `stack` when one was given.
pub fn handle_switch_or_list(stack: Option<&str>, show_active: bool) -> i32 {
    match run(stack, show_active) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    }
}

/// Writes a completion script for `shell` to stdout.
pub fn handle_completions(shell: Shell) -> i32 {
    let mut cmd = CliArgs::command();
    clap_complete::generate(shell, &mut cmd, crate::NAME, &mut io::stdout());

    // The generated scripts cover flags and subcommands; bash and zsh get an
    // extra hook that resolves stack names at completion time.
    match shell {
        Shell::Bash => print!("{BASH_DYNAMIC_COMPLETION}"),
        Shell::Zsh => print!("{ZSH_DYNAMIC_COMPLETION}"),
        _ => {}
    }
    0
}

/// Answers a dynamic completion request for the first positional argument.
///
/// Detection runs fresh on every request. A detection failure exits non-zero
/// with no candidates so the shell falls back to its default behavior.
pub fn handle_complete(prefix: &str) -> i32 {
    let stacks = match detector::detect_in_current_dir() {
        Ok(stacks) => stacks,
        Err(err) => {
            debug!(error = %err, "stack detection failed during completion");
            return 1;
        }
    };

    for stack in detector::filter_by_prefix(stacks, prefix) {
        println!("{stack}");
    }
    0
}

fn run(stack: Option<&str>, show_active: bool) -> Result<()> {
    let available = detector::detect_in_current_dir().context("failed to detect stacks")?;

    if available.is_empty() {
        if !detector::has_project_marker(Path::new(".")) {
            bail!(
                "no Pulumi stacks found in the current directory (looking for \
                 Pulumi.<stack-name>.yaml files); this directory has no Pulumi.yaml \
                 and does not look like a Pulumi project root"
            );
        }
        bail!(
            "no Pulumi stacks found in the current directory (looking for \
             Pulumi.<stack-name>.yaml files)"
        );
    }

    let Some(name) = stack else {
        let active = if show_active {
            pulumi::current_stack()
        } else {
            None
        };
        print!("{}", render_stack_list(&available, active.as_deref()));
        return Ok(());
    };

    if !available.iter().any(|s| s == name) {
        bail!(
            "stack '{}' not found; available stacks: {}",
            name,
            available.join(", ")
        );
    }

    pulumi::select_stack(name).context("failed to switch stack")?;
    println!("Switched to stack '{name}'");
    Ok(())
}

fn render_stack_list(stacks: &[String], active: Option<&str>) -> String {
    let mut out = String::from("Available stacks:\n");
    for stack in stacks {
        if active == Some(stack.as_str()) {
            out.push_str(&format!("  {stack} (active)\n"));
        } else {
            out.push_str(&format!("  {stack}\n"));
        }
    }
    out
}
