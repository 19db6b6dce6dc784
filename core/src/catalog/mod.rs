//! Directory scan results shown by the Browse screen.

use crate::catalog::error::CatalogError;
use crate::host::{EntryKind, Storage};
use crate::types::FileName;
use log::{debug, warn};
use std::path::Path;

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("could not read {}: {source}", .path.display())]
        ScanFailed {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }
}

/// Plain files found by the most recent [`FileCatalog::rescan`].
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    entries: Vec<FileName>,
}

impl FileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with the plain files in `dir`, in enumeration order.
    ///
    /// Sub-directories and names that are not valid [`FileName`]s are skipped.
    /// On failure the catalog is left empty.
    pub fn rescan<S: Storage>(
        &mut self,
        storage: &S,
        dir: &Path,
    ) -> Result<&[FileName], CatalogError> {
        self.entries.clear();

        let scan_failed = |source| CatalogError::ScanFailed {
            path: dir.to_path_buf(),
            source,
        };

        for entry in storage.open_directory(dir).map_err(scan_failed)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.entries.clear();
                    return Err(scan_failed(e));
                }
            };

            if entry.kind != EntryKind::File {
                continue;
            }

            let Some(raw) = entry.name.to_str() else {
                warn!("Skipping non UTF-8 file name {:?}", entry.name);
                continue;
            };

            match FileName::try_from(raw) {
                Ok(name) => self.entries.push(name),
                Err(e) => warn!("Skipping file {raw:?}: {e}"),
            }
        }

        debug!("Scanned {}: {} files", dir.display(), self.entries.len());
        Ok(&self.entries)
    }

    pub fn entries(&self) -> &[FileName] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileName> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
