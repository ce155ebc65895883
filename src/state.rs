use std::path::Path;

use crate::data::loader;
use crate::data::model::ExoDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file loads; charts stay blank without it).
    pub dataset: Option<ExoDataset>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    /// Ingest a newly loaded dataset.
    pub fn set_dataset(&mut self, dataset: ExoDataset) {
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Load the dataset from a path, logging the outcome. On failure the
    /// previous dataset (if any) is kept and the error surfaces as a status
    /// message; no retry is attempted.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} exoplanets from {}", dataset.len(), path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }
}
