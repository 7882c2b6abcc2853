use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::Record;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset {} is not a list of records: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of the catalog. Each call returns a freshly read dataset.
pub trait Loader: Send + Sync {
    fn load(&self) -> Result<Vec<Record>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Loader for FileLoader {
    fn load(&self) -> Result<Vec<Record>, LoadError> {
        let raw = fs::read(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<Record> =
            serde_json::from_slice(&raw).map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
