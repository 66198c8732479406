//! Whole-file reads and writes with path context on failure.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads the entire file at `path`.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Creates or truncates `path` and writes `bytes` to it.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
