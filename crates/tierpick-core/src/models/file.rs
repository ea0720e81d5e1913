//! Catalog entries.
//!
//! An `AudioFile` is one candidate encoding of a track. The picker only reads
//! it and hands back a reference into the caller's catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::{AudioFormat, CodecFamily};
use crate::error::CatalogError;

/// One encoding of a track as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAudioFile")]
pub struct AudioFile {
    /// Opaque id the downstream fetch stage resolves.
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<AudioFormat>,
    pub family: CodecFamily,
}

impl AudioFile {
    /// File in the natural family of `format`.
    pub fn new(file_id: impl Into<String>, format: AudioFormat) -> Self {
        Self {
            file_id: file_id.into(),
            format: Some(format),
            family: format.family(),
        }
    }

    /// File whose catalog entry names a family but no specific encoding.
    pub fn without_format(file_id: impl Into<String>, family: CodecFamily) -> Self {
        Self {
            file_id: file_id.into(),
            format: None,
            family,
        }
    }

    /// Override the family, for catalogs that group encodings differently.
    pub fn with_family(mut self, family: CodecFamily) -> Self {
        self.family = family;
        self
    }
}

impl fmt::Display for AudioFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Some(format) => write!(f, "{} ({}, {})", self.file_id, format, self.family),
            None => write!(f, "{} ({})", self.file_id, self.family),
        }
    }
}

/// Wire shape: `family` may be omitted when `format` implies it.
#[derive(Deserialize)]
struct RawAudioFile {
    file_id: String,
    #[serde(default)]
    format: Option<AudioFormat>,
    #[serde(default)]
    family: Option<CodecFamily>,
}

impl TryFrom<RawAudioFile> for AudioFile {
    type Error = CatalogError;

    fn try_from(raw: RawAudioFile) -> Result<Self, Self::Error> {
        let family = match (raw.family, raw.format) {
            (Some(family), _) => family,
            (None, Some(format)) => format.family(),
            (None, None) => {
                return Err(CatalogError::InvalidFile(format!(
                    "'{}' has neither family nor format",
                    raw.file_id
                )))
            }
        };
        Ok(Self {
            file_id: raw.file_id,
            format: raw.format,
            family,
        })
    }
}
