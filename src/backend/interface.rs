use std::path::PathBuf;

use thiserror::Error;

use crate::core::Dataset;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error }
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Whole-dataset access to the backing store.
///
/// Every call goes to the store; nothing is cached between calls
/// and nothing guards a `load` .. `save` cycle against another one.
pub trait UserStore {
    fn load(&self) -> Result<Dataset>;
    fn save(&self, dataset: &Dataset) -> Result<()>;
}
