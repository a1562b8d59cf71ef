//! Shared domain types.

/// A secret ready to be pushed: final remote name plus stringified payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEntry {
    /// Remote secret identifier (after optional prefixing)
    pub name: String,
    /// Fully stringified value
    pub value: String,
}

/// Side-effect switches for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunMode {
    /// Report intended mutations instead of performing them
    pub dry_run: bool,
    /// Delete remote secrets absent from the desired set
    pub delete_missing: bool,
}
