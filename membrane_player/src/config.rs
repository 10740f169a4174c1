//! Env parsing and constants.

use std::path::PathBuf;

use bevy::log::warn;

/// Number of snapshot files in a run.
pub const TOTAL_FRAMES: usize = 60;

/// Number of lipids the snapshot generator simulates.
pub const GENERATED_LIPIDS: usize = 200;

const SNAPSHOT_DIR_ENV: &str = "SNAPSHOT_DIR";
const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";

/// Directory holding `frame_{index:05}.json` files.
/// Reads `SNAPSHOT_DIR`, falling back to `snapshots` when unset or blank.
pub fn snapshot_dir() -> PathBuf {
    match std::env::var(SNAPSHOT_DIR_ENV) {
        Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
        Ok(_) => {
            warn!("{SNAPSHOT_DIR_ENV} is blank, using {DEFAULT_SNAPSHOT_DIR}");
            PathBuf::from(DEFAULT_SNAPSHOT_DIR)
        }
        Err(_) => PathBuf::from(DEFAULT_SNAPSHOT_DIR),
    }
}
