//! The sync flow: resolve repository, load table, filter, push, prune.

use tracing::{debug, info};
use which::which;

use crate::cli::{output, Cli};
use crate::core::filter::FilterSpec;
use crate::core::repo;
use crate::core::store::GhStore;
use crate::core::sync as engine;
use crate::core::types::RunMode;
use crate::core::{config, sync::SyncReport};
use crate::error::{Error, Result};

/// Run one synchronization pass.
///
/// All preconditions are checked before any mutating call, so a
/// configuration or resolution error never leaves the remote store
/// partially modified.
pub fn execute(cli: &Cli) -> Result<()> {
    which("gh").map_err(|_| Error::MissingDependency("gh"))?;

    let repo = repo::resolve(cli.repo.as_deref())?;
    debug!(repo = %repo, "resolved target repository");

    let table = config::load_table(&cli.file, &cli.table)?;
    let spec = FilterSpec::compile(
        cli.only.as_deref(),
        cli.exclude.as_deref(),
        cli.prefix.clone(),
    )?;
    let entries = spec.apply(&table);

    if entries.is_empty() {
        output::dimmed("nothing to push (all keys filtered out)");
        return Ok(());
    }

    let scope = match &cli.environment {
        Some(env) => format!("{repo} (env: {env})"),
        None => repo.clone(),
    };
    output::kv("repo:", scope);
    output::kv(
        "source:",
        format!("{} [{}]", cli.file.display(), cli.table),
    );
    println!();
    println!(
        "Upserting {} secret{}",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );
    for entry in &entries {
        output::list_item(&entry.name);
    }

    let mode = RunMode {
        dry_run: cli.dry_run,
        delete_missing: cli.delete_missing,
    };
    let store = GhStore::new(repo, cli.environment.clone());
    let report = engine::sync(&store, &entries, mode)?;
    info!(
        upserted = report.upserted.len(),
        deleted = report.deleted.len(),
        dry_run = cli.dry_run,
        "sync finished"
    );

    if cli.dry_run {
        for name in &report.upserted {
            output::dimmed(&format!("[dry] would set {name}"));
        }
    }

    if cli.delete_missing {
        report_deletions(cli, &report);
    }

    output::success("Done.");
    Ok(())
}

/// Print the deletion summary for a run with `--delete-missing`.
fn report_deletions(cli: &Cli, report: &SyncReport) {
    if report.deleted.is_empty() {
        output::dimmed("no secrets to delete");
        return;
    }

    println!(
        "Deleting {} secret{} not in the table",
        report.deleted.len(),
        if report.deleted.len() == 1 { "" } else { "s" }
    );
    for name in &report.deleted {
        if cli.dry_run {
            output::dimmed(&format!("[dry] would delete {name}"));
        } else {
            output::list_item(name);
        }
    }
}
