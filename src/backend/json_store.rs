use std::{fs, path::{Path, PathBuf}};

use log::{debug, info};

use crate::core::Dataset;
use crate::backend::interface::{UserStore, BackendError, Result};

/// A single JSON file holding the whole dataset.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf
}

impl JsonStore {
    /// Opening does not touch the file: a missing file only shows up
    /// as a failed `load`.
    pub fn open(path: impl AsRef<Path>) -> JsonStore {
        let path = path.as_ref().to_path_buf();
        info!("using data file {}", path.display());
        JsonStore { path }
    }

    pub fn close(self) {
        info!("released data file {}", self.path.display());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonStore {
    fn load(&self) -> Result<Dataset> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| BackendError::Read { path: self.path.clone(), source })?;
        let dataset: Dataset = serde_json::from_str(&content)
            .map_err(|source| BackendError::Parse { path: self.path.clone(), source })?;
        debug!("loaded {} users from {}", dataset.users.len(), self.path.display());
        return Ok(dataset);
    }

    fn save(&self, dataset: &Dataset) -> Result<()> {
        let content = serde_json::to_string_pretty(dataset)
            .map_err(BackendError::Serialize)?;
        fs::write(&self.path, content)
            .map_err(|source| BackendError::Write { path: self.path.clone(), source })?;
        debug!("saved {} users to {}", dataset.users.len(), self.path.display());
        return Ok(());
    }
}
