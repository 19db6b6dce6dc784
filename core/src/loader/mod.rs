//! Reads a catalogued file into memory for the text view.

use crate::host::Storage;
use crate::loader::error::LoadError;
use crate::types::{FileName, ViewerConfig};
use std::borrow::Cow;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

pub mod error {
    use crate::types::FileName;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum LoadError {
        #[error("{0} no longer exists")]
        NotFound(FileName),

        #[error("could not open {name}: {source}")]
        Open {
            name: FileName,
            #[source]
            source: std::io::Error,
        },

        #[error("could not read {name}: {source}")]
        Read {
            name: FileName,
            #[source]
            source: std::io::Error,
        },
    }
}

/// Marker appended to the displayed text when a file hit the size cap.
pub const TRUNCATION_MARKER: &str = "[truncated]";

/// File contents as read from storage, up to the loader's cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    bytes: Vec<u8>,
    truncated: bool,
}

impl Content {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the file continued past the cap.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Lossy UTF-8 view of the bytes.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Text as the content view shows it, with the truncation marker if needed.
    pub fn display_text(&self) -> String {
        let mut text = self.text().into_owned();
        if self.truncated {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(TRUNCATION_MARKER);
        }
        text
    }
}

pub struct ContentLoader {
    root: PathBuf,
    chunk_size: usize,
    max_bytes: usize,
}

impl ContentLoader {
    /// Zero sizes are bumped to one byte.
    pub fn new(root: impl Into<PathBuf>, chunk_size: usize, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            chunk_size: chunk_size.max(1),
            max_bytes: max_bytes.max(1),
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &ViewerConfig) -> Self {
        Self::new(root, config.read_chunk_bytes, config.max_content_bytes)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &FileName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Reads `name` from the root directory chunk by chunk until end of file
    /// or until the cap is reached.
    pub fn load<S: Storage>(&self, storage: &S, name: &FileName) -> Result<Content, LoadError> {
        let path = self.path_for(name);
        let mut file = storage.open_file(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::NotFound(name.clone())
            } else {
                LoadError::Open {
                    name: name.clone(),
                    source,
                }
            }
        })?;

        let read_failed = |source| LoadError::Read {
            name: name.clone(),
            source,
        };

        let mut bytes = Vec::new();
        let mut chunk = vec![0u8; self.chunk_size];
        loop {
            let remaining = self.max_bytes - bytes.len();
            if remaining == 0 {
                // Probe one more byte to tell "exactly at the cap" from "cut off".
                let truncated = read_some(&mut file, &mut chunk[..1]).map_err(read_failed)? > 0;
                return Ok(Content { bytes, truncated });
            }

            let want = remaining.min(chunk.len());
            let read = read_some(&mut file, &mut chunk[..want]).map_err(read_failed)?;
            if read == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..read]);
        }

        Ok(Content {
            bytes,
            truncated: false,
        })
    }
}

fn read_some(file: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match file.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests;
