//! # Ledger State File
//!
//! Load/save helpers for the JSON state file every subcommand operates on.
//! The file holds the complete ledger instance, including the reference
//! backend's cell table and signing seed — suitable for local demos and
//! tests, nothing more.

use std::path::Path;

use anyhow::{bail, Context, Result};

use ctl_algebra::ClearAlgebra;
use ctl_ledger::Ledger;

/// The ledger type the CLI operates on.
pub type CliLedger = Ledger<ClearAlgebra>;

/// Load the ledger from `path`.
pub fn load(path: &Path) -> Result<CliLedger> {
    if !path.exists() {
        bail!(
            "ledger state file not found: {} (run `ctl init` first)",
            path.display()
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let ledger = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(ledger)
}

/// Write the ledger to `path` via a sibling temp file and rename, so a
/// crash mid-write never leaves a truncated state file behind.
pub fn save(path: &Path, ledger: &CliLedger) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
