use crate::core::Storage;
use crate::utils::error::{FixtureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes fixture files under a root directory, one folder per scenario.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn write_failed(path: &Path, source: std::io::Error) -> FixtureError {
    FixtureError::WriteFailed {
        path: path.display().to_string(),
        source,
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.root.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| write_failed(&full_path, e))?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}
