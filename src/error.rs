//! Error taxonomy for hoist.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{0}` not found on PATH")]
    MissingDependency(&'static str),

    #[error("no git remote configured: pass --repo owner/repo or run inside a clone")]
    NoRemoteConfigured,

    #[error("could not extract owner/repo from remote url: {0}")]
    RepoResolutionFailed(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("table [{}] not found in {}", .table, .path.display())]
    TableNotFound { table: String, path: PathBuf },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("`{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
