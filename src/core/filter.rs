//! Key filtering and renaming.
//!
//! Applies the optional include/exclude patterns and prefix to a loaded
//! table, producing the ordered list of secrets to push.

use regex::Regex;
use toml::Table;
use tracing::debug;

use crate::core::types::SecretEntry;
use crate::core::value;
use crate::error::Result;

/// Compiled filter settings for a run.
///
/// An absent pattern always passes; an empty prefix leaves names unchanged.
#[derive(Debug)]
pub struct FilterSpec {
    include: Option<Regex>,
    exclude: Option<Regex>,
    prefix: Option<String>,
}

impl FilterSpec {
    /// Compile the user-supplied patterns.
    pub fn compile(
        include: Option<&str>,
        exclude: Option<&str>,
        prefix: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            include: include.map(Regex::new).transpose()?,
            exclude: exclude.map(Regex::new).transpose()?,
            prefix,
        })
    }

    /// Whether a key survives the include/exclude patterns.
    ///
    /// A key is retained iff the include pattern is absent or matches
    /// anywhere in the key, and the exclude pattern is absent or does not
    /// match. When both match, exclude wins.
    pub fn retains(&self, key: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.is_match(key) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(key) {
                return false;
            }
        }
        true
    }

    /// Final remote name for a surviving key.
    fn rename(&self, key: &str) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}{key}"),
            _ => key.to_string(),
        }
    }

    /// Filter and rename the table's entries, in insertion order.
    ///
    /// Values are stringified on the way through. Source keys are unique
    /// and the prefix is applied uniformly, so final names are unique too.
    pub fn apply(&self, table: &Table) -> Vec<SecretEntry> {
        let entries: Vec<SecretEntry> = table
            .iter()
            .filter(|(key, _)| self.retains(key))
            .map(|(key, v)| SecretEntry {
                name: self.rename(key),
                value: value::stringify(v),
            })
            .collect();

        debug!(
            total = table.len(),
            retained = entries.len(),
            "applied key filters"
        );
        entries
    }
}
