//! Remote secret store backends.
//!
//! The synchronizer only sees the [`SecretStore`] trait; the CLI wires in
//! [`GhStore`] and tests substitute a recording fake.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Capabilities of a remote secret store.
pub trait SecretStore {
    /// List the names of all secrets currently present.
    fn list(&self) -> Result<Vec<String>>;

    /// Create or update a secret.
    fn set(&self, name: &str, value: &str) -> Result<()>;

    /// Delete a secret.
    fn delete(&self, name: &str) -> Result<()>;
}

/// GitHub Actions secrets driven through the authenticated `gh` CLI.
pub struct GhStore {
    repo: String,
    environment: Option<String>,
}

impl GhStore {
    pub fn new(repo: String, environment: Option<String>) -> Self {
        Self { repo, environment }
    }

    /// Append the `--env` scope when configured.
    fn scope(&self, cmd: &mut Command) {
        if let Some(env) = &self.environment {
            cmd.args(["--env", env.as_str()]);
        }
    }

    /// Run a mutating gh invocation, discarding stdout so values never echo.
    fn run(&self, cmd: &mut Command, label: &str) -> Result<()> {
        let status = cmd.stdout(Stdio::null()).status()?;
        if !status.success() {
            return Err(Error::CommandFailed {
                command: label.to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl SecretStore for GhStore {
    fn list(&self) -> Result<Vec<String>> {
        let mut cmd = Command::new("gh");
        cmd.args([
            "secret",
            "list",
            "--repo",
            self.repo.as_str(),
            "--json",
            "name",
            "-q",
            ".[].name",
        ]);
        self.scope(&mut cmd);

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: "gh secret list".to_string(),
                status: output.status,
            });
        }

        let mut names: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        debug!(count = names.len(), "listed remote secrets");
        Ok(names)
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        debug!(name, "gh secret set");
        let mut cmd = Command::new("gh");
        cmd.args(["secret", "set", name, "--repo", self.repo.as_str(), "--body", value]);
        self.scope(&mut cmd);
        self.run(&mut cmd, "gh secret set")
    }

    fn delete(&self, name: &str) -> Result<()> {
        debug!(name, "gh secret delete");
        let mut cmd = Command::new("gh");
        cmd.args(["secret", "delete", name, "--repo", self.repo.as_str(), "-y"]);
        self.scope(&mut cmd);
        self.run(&mut cmd, "gh secret delete")
    }
}
