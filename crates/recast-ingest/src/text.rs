//! Plain-text documents.

use std::path::Path;

use recast_model::{TextDocument, TextEncoding};
use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::{IngestError, Result};
use crate::files::{read_bytes, write_bytes};

/// Reads the whole file at `path` as one buffer decoded with `encoding`.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<TextDocument> {
    let bytes = read_bytes(path)?;
    let text = decode(&bytes, encoding).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        encoding = %encoding,
        bytes = bytes.len(),
        "read text document"
    );
    Ok(TextDocument::new(text))
}

/// Writes `document` to `path` encoded with `encoding`.
///
/// Nothing is written if the document cannot be encoded.
pub fn write_text(path: &Path, document: &TextDocument, encoding: TextEncoding) -> Result<()> {
    let bytes = encode(document.as_str(), encoding).map_err(|source| IngestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    write_bytes(path, &bytes)?;
    debug!(
        path = %path.display(),
        encoding = %encoding,
        bytes = bytes.len(),
        "wrote text document"
    );
    Ok(())
}
