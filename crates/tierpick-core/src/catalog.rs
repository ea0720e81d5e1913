//! Catalog loading.
//!
//! A catalog is the list of encodings available for one track. On disk it is
//! either a bare JSON array of files or an object with a `files` array.

use std::path::Path;

use crate::error::CatalogError;
use crate::models::AudioFile;

/// Parse a catalog from JSON text.
pub fn parse_catalog(json: &str) -> Result<Vec<AudioFile>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let files = match value {
        serde_json::Value::Object(mut map) => match map.remove("files") {
            Some(files) => serde_json::from_value(files)?,
            None => serde_json::from_value(serde_json::Value::Object(map))?,
        },
        other => serde_json::from_value(other)?,
    };
    Ok(files)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<AudioFile>, CatalogError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let files = parse_catalog(&text)?;
    log::debug!(
        "tierpick: loaded {} files from {}",
        files.len(),
        path.as_ref().display()
    );
    Ok(files)
}
