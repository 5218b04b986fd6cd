use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{CategoryFilter, StatusFilter};

/// Persisted CLI view state (written to state.json in the data directory).
///
/// The container holds filter selections in memory only; a
/// process-per-command frontend replays them from here. This file is not
/// part of the container's persistence contract.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Status filter (all / active / completed)
    #[serde(default)]
    pub status_filter: StatusFilter,
    /// Category filter ("All" or a category name)
    #[serde(default)]
    pub category_filter: CategoryFilter,
}

/// Read state.json from the data directory
pub fn read_view_state(data_dir: &Path) -> Option<ViewState> {
    let path = data_dir.join("state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write state.json to the data directory
pub fn write_view_state(data_dir: &Path, state: &ViewState) -> Result<(), std::io::Error> {
    let path = data_dir.join("state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
