//! Quality tiers and the classification table.
//!
//! Every classified encoding belongs to exactly one tier. Encodings outside
//! the table fail classification with [`QualityError::UnknownEncoding`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::file::AudioFile;
use super::format::AudioFormat;
use crate::error::QualityError;

/// Discrete quality level, ordered by nominal bitrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AudioQuality {
    #[default]
    Normal,
    High,
    VeryHigh,
}

const QUALITY_TABLE: [(AudioFormat, AudioQuality); 12] = [
    (AudioFormat::Mp3_96, AudioQuality::Normal),
    (AudioFormat::OggVorbis96, AudioQuality::Normal),
    (AudioFormat::Aac24Norm, AudioQuality::Normal),
    (AudioFormat::Mp4_128, AudioQuality::Normal),
    (AudioFormat::Mp3_160, AudioQuality::High),
    (AudioFormat::Mp3_160Enc, AudioQuality::High),
    (AudioFormat::OggVorbis160, AudioQuality::High),
    (AudioFormat::Aac24, AudioQuality::High),
    (AudioFormat::Mp3_320, AudioQuality::VeryHigh),
    (AudioFormat::Mp3_256, AudioQuality::VeryHigh),
    (AudioFormat::OggVorbis320, AudioQuality::VeryHigh),
    (AudioFormat::Aac48, AudioQuality::VeryHigh),
];

impl AudioQuality {
    pub const ALL: [AudioQuality; 3] = [Self::Normal, Self::High, Self::VeryHigh];

    /// Tier of `format`, or `UnknownEncoding` if the table has no entry for it.
    pub fn classify(format: AudioFormat) -> Result<Self, QualityError> {
        QUALITY_TABLE
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, q)| *q)
            .ok_or(QualityError::UnknownEncoding(format))
    }

    /// Table entries belonging to this tier.
    pub fn formats(self) -> Vec<AudioFormat> {
        QUALITY_TABLE
            .iter()
            .filter(|(_, q)| *q == self)
            .map(|(f, _)| *f)
            .collect()
    }

    /// Files whose format classifies to this tier, in catalog order.
    ///
    /// Files without a format are skipped. A present format missing from the
    /// table aborts the scan with `UnknownEncoding`.
    pub fn matches<'a>(self, files: &'a [AudioFile]) -> Result<Vec<&'a AudioFile>, QualityError> {
        let mut list = Vec::new();
        for file in files {
            if let Some(format) = file.format {
                if Self::classify(format)? == self {
                    list.push(file);
                }
            }
        }
        Ok(list)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AudioQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "very_high" | "veryhigh" => Ok(Self::VeryHigh),
            other => Err(format!("unknown quality: {} (expected normal, high or very_high)", other)),
        }
    }
}
