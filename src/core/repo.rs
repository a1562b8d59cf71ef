//! Target repository resolution.
//!
//! Determines the `owner/repo` to operate on, either from an explicit
//! override or from the git origin remote of the current directory.

use std::process::Command;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Resolve the target repository.
///
/// An explicit value is returned verbatim, without format validation.
/// Otherwise the origin remote URL is read from git and reduced to its
/// trailing `owner/repo` segment.
pub fn resolve(explicit: Option<&str>) -> Result<String> {
    if let Some(repo) = explicit {
        return Ok(repo.to_string());
    }

    let remote = origin_url()?;
    debug!(remote = %remote, "read origin remote");
    from_remote_url(&remote)?.ok_or(Error::RepoResolutionFailed(remote))
}

/// Read the configured origin remote URL from git.
fn origin_url() -> Result<String> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .map_err(|_| Error::NoRemoteConfigured)?;

    if !output.status.success() {
        return Err(Error::NoRemoteConfigured);
    }

    let remote = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if remote.is_empty() {
        return Err(Error::NoRemoteConfigured);
    }
    Ok(remote)
}

/// Extract `owner/repo` from an SSH or HTTPS GitHub remote URL.
///
/// Returns `Ok(None)` when the URL does not point at github.com.
fn from_remote_url(remote: &str) -> Result<Option<String>> {
    // ssh:   git@github.com:owner/repo.git
    // https: https://github.com/owner/repo.git
    let normalized = remote.replacen("git@github.com:", "https://github.com/", 1);
    let normalized = normalized.strip_suffix(".git").unwrap_or(&normalized);

    let re = Regex::new(r"github\.com/([^/]+/[^/]+)$")?;
    Ok(re
        .captures(normalized)
        .map(|caps| caps[1].to_string()))
}
