//! Loading helpers that read a whole document before handing it to the parser.

use crate::error::{JsonError, Result};
use crate::parser::parse;
use crate::types::Value;
use std::path::Path;
use tracing::debug;

/// Parse a document that is already in memory. Same as [`parse`].
pub fn load_from_text(text: &str) -> Result<Option<Value>> {
    parse(text)
}

/// Read `path` into memory and parse it. An empty file yields `Ok(None)`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Option<Value>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| JsonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded json file");
    load_from_text(&text)
}
