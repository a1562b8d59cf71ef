//! Configuration file loading.
//!
//! Reads the TOML file holding the values to push and extracts the
//! requested top-level table.

use std::path::Path;

use toml::Table;
use tracing::debug;

use crate::error::{Error, Result};

/// Load `path` and return the top-level table named `table`.
///
/// The file is parsed fully; entries keep the order they appear in on disk.
pub fn load_table(path: &Path, table: &str) -> Result<Table> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let root: Table = toml::from_str(&contents)?;

    let entries = root
        .get(table)
        .and_then(|v| v.as_table())
        .ok_or_else(|| Error::TableNotFound {
            table: table.to_string(),
            path: path.to_path_buf(),
        })?;

    debug!(keys = entries.len(), table, "loaded config table");
    Ok(entries.clone())
}
