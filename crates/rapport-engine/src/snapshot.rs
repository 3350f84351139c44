//! Snapshot persistence for engine state

use crate::Result;
use rapport_domain::EngineState;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write an engine state snapshot to a JSON file.
///
/// Creates parent directories as needed.
pub fn write_snapshot(path: &Path, state: &EngineState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "snapshot written");
    Ok(())
}

/// Read an engine state snapshot from a JSON file.
pub fn read_snapshot(path: &Path) -> Result<EngineState> {
    let contents = fs::read_to_string(path)?;
    let state: EngineState = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        exchanges = state.exchange_count(),
        anchors = state.anchor_count(),
        "snapshot loaded"
    );
    Ok(state)
}
