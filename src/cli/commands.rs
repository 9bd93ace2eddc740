use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Switch between Pulumi stacks with ease
#[derive(Parser, Debug)]
#[command(
    name = "stackswitch",
    about = "Switch between Pulumi stacks with ease",
    version,
    long_about = "A lightweight CLI tool that makes it easy to switch between Pulumi stacks.\n\n\
                  It automatically detects available stacks by scanning for Pulumi.<stack-name>.yaml \
                  files in the current directory and provides shell completion for quick switching.\n\n\
                  Examples:\n  \
                  stackswitch dev         # Switch to the 'dev' stack\n  \
                  stackswitch production  # Switch to the 'production' stack\n  \
                  stackswitch             # List available stacks\n  \
                  stackswitch --active    # List stacks and show which is active"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        value_name = "STACK",
        help = "Stack to switch to (omit to list available stacks)"
    )]
    pub stack: Option<String>,

    #[arg(
        short = 'a',
        long,
        help = "Show which stack is currently active (slower, calls the pulumi CLI)"
    )]
    pub active: bool,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate a shell completion script",
        long_about = "Generates a completion script for the given shell and writes it to stdout.\n\n\
                      For bash and zsh the script also completes stack names dynamically by \
                      re-scanning the current directory on every request.\n\n\
                      Examples:\n  \
                      stackswitch completions bash > /etc/bash_completion.d/stackswitch\n  \
                      stackswitch completions zsh > \"${fpath[1]}/_stackswitch\""
    )]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Dynamic completion request used by the generated scripts
    #[command(name = "__complete", hide = true)]
    Complete {
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,
    },
}
