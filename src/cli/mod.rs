//! Command-line interface.

pub mod completions;
pub mod output;
pub mod sync;

use std::path::PathBuf;

use clap::Parser;

/// Hoist - push TOML-declared environment values up to GitHub Actions secrets.
#[derive(Parser)]
#[command(
    name = "hoist",
    about = "Push TOML-declared environment values up to GitHub Actions secrets",
    version
)]
pub struct Cli {
    /// Target repository as owner/repo (default: inferred from the git origin remote)
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// GitHub environment to scope all operations to
    #[arg(long = "env", value_name = "NAME")]
    pub environment: Option<String>,

    /// TOML file to read
    #[arg(long, default_value = ".mise.local.toml", value_name = "PATH")]
    pub file: PathBuf,

    /// Table within the TOML file holding the values
    #[arg(long, default_value = "env", value_name = "NAME")]
    pub table: String,

    /// Only push keys matching this regex
    #[arg(long, value_name = "REGEX")]
    pub only: Option<String>,

    /// Skip keys matching this regex
    #[arg(long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Prefix prepended to every pushed secret name
    #[arg(long, value_name = "STRING")]
    pub prefix: Option<String>,

    /// Delete remote secrets that are not in the table
    #[arg(long)]
    pub delete_missing: bool,

    /// Report intended changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed invocation.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    if let Some(shell) = &cli.completions {
        return completions::execute(shell.clone());
    }

    sync::execute(&cli)
}
