//! Hoist - push TOML-declared environment values up to GitHub Actions secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hoist::cli::output;
use hoist::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("HOIST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hoist=debug")
        } else {
            EnvFilter::new("hoist=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            hoist::error::Error::MissingDependency("gh") => {
                Some("install the GitHub CLI: https://cli.github.com")
            }
            hoist::error::Error::NoRemoteConfigured
            | hoist::error::Error::RepoResolutionFailed(_) => {
                Some("pass --repo <owner/repo> explicitly")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
