//! Secret synchronization engine.
//!
//! Pushes the desired entries through an injected [`SecretStore`] and
//! optionally prunes remote secrets missing from the desired set. Upserts
//! always run before deletions so a renamed secret exists under its new
//! name before the old name disappears.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::store::SecretStore;
use crate::core::types::{RunMode, SecretEntry};
use crate::error::Result;

/// What a run did, or in dry-run mode would have done.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Names upserted, in push order
    pub upserted: Vec<String>,
    /// Names deleted, lexicographic order
    pub deleted: Vec<String>,
}

/// Remote names not part of the desired set, sorted.
pub fn deletions(remote: &[String], desired: &BTreeSet<String>) -> Vec<String> {
    let mut extra: Vec<String> = remote
        .iter()
        .filter(|name| !desired.contains(*name))
        .cloned()
        .collect();
    extra.sort();
    extra.dedup();
    extra
}

/// Push all entries, then prune when enabled.
///
/// Dry-run suppresses every mutating call; the remote listing for the
/// deletion phase is read-only and still happens. Any store failure
/// aborts immediately, leaving whatever already committed in place.
pub fn sync(store: &dyn SecretStore, entries: &[SecretEntry], mode: RunMode) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for entry in entries {
        if !mode.dry_run {
            store.set(&entry.name, &entry.value)?;
        }
        report.upserted.push(entry.name.clone());
    }

    if mode.delete_missing {
        let desired: BTreeSet<String> = entries.iter().map(|e| e.name.clone()).collect();
        let remote = store.list()?;
        debug!(
            remote = remote.len(),
            desired = desired.len(),
            "computing deletion set"
        );
        for name in deletions(&remote, &desired) {
            if !mode.dry_run {
                store.delete(&name)?;
            }
            report.deleted.push(name);
        }
    }

    Ok(report)
}
