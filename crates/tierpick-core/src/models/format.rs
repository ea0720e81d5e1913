//! Encoding and codec family types.
//!
//! `AudioFormat` is the closed set of encoding names a catalog may carry.
//! Names outside the set are rejected at parse time, never passed through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Broad container/codec grouping of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodecFamily {
    Vorbis,
    Mp3,
    Aac,
    Mp4,
    Flac,
}

impl CodecFamily {
    pub fn name(self) -> &'static str {
        match self {
            Self::Vorbis => "VORBIS",
            Self::Mp3 => "MP3",
            Self::Aac => "AAC",
            Self::Mp4 => "MP4",
            Self::Flac => "FLAC",
        }
    }
}

impl fmt::Display for CodecFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A specific bitrate/codec variant of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AudioFormat {
    OggVorbis96,
    OggVorbis160,
    OggVorbis320,
    Mp3_96,
    Mp3_160,
    Mp3_160Enc,
    Mp3_256,
    Mp3_320,
    Aac24,
    Aac24Norm,
    Aac48,
    Mp4_128,
    Mp4_128Dual,
    Mp4_256,
    Mp4_256Dual,
    Flac,
    Flac24Bit,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 17] = [
        Self::OggVorbis96,
        Self::OggVorbis160,
        Self::OggVorbis320,
        Self::Mp3_96,
        Self::Mp3_160,
        Self::Mp3_160Enc,
        Self::Mp3_256,
        Self::Mp3_320,
        Self::Aac24,
        Self::Aac24Norm,
        Self::Aac48,
        Self::Mp4_128,
        Self::Mp4_128Dual,
        Self::Mp4_256,
        Self::Mp4_256Dual,
        Self::Flac,
        Self::Flac24Bit,
    ];

    /// Catalog name, e.g. `OGG_VORBIS_160`.
    pub fn name(self) -> &'static str {
        match self {
            Self::OggVorbis96 => "OGG_VORBIS_96",
            Self::OggVorbis160 => "OGG_VORBIS_160",
            Self::OggVorbis320 => "OGG_VORBIS_320",
            Self::Mp3_96 => "MP3_96",
            Self::Mp3_160 => "MP3_160",
            Self::Mp3_160Enc => "MP3_160_ENC",
            Self::Mp3_256 => "MP3_256",
            Self::Mp3_320 => "MP3_320",
            Self::Aac24 => "AAC_24",
            Self::Aac24Norm => "AAC_24_NORM",
            Self::Aac48 => "AAC_48",
            Self::Mp4_128 => "MP4_128",
            Self::Mp4_128Dual => "MP4_128_DUAL",
            Self::Mp4_256 => "MP4_256",
            Self::Mp4_256Dual => "MP4_256_DUAL",
            Self::Flac => "FLAC_FLAC",
            Self::Flac24Bit => "FLAC_FLAC_24BIT",
        }
    }

    /// The codec family this encoding naturally belongs to.
    pub fn family(self) -> CodecFamily {
        match self {
            Self::OggVorbis96 | Self::OggVorbis160 | Self::OggVorbis320 => CodecFamily::Vorbis,
            Self::Mp3_96 | Self::Mp3_160 | Self::Mp3_160Enc | Self::Mp3_256 | Self::Mp3_320 => {
                CodecFamily::Mp3
            }
            Self::Aac24 | Self::Aac24Norm | Self::Aac48 => CodecFamily::Aac,
            Self::Mp4_128 | Self::Mp4_128Dual | Self::Mp4_256 | Self::Mp4_256Dual => {
                CodecFamily::Mp4
            }
            Self::Flac | Self::Flac24Bit => CodecFamily::Flac,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unrecognized audio format: {}", wanted))
    }
}

impl TryFrom<String> for AudioFormat {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AudioFormat> for &'static str {
    fn from(f: AudioFormat) -> Self {
        f.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for format in AudioFormat::ALL {
            assert_eq!(format.name().parse::<AudioFormat>(), Ok(format));
        }
        assert_eq!("mp3_160_enc".parse::<AudioFormat>(), Ok(AudioFormat::Mp3_160Enc));
    }

    #[test]
    fn unrecognized_name_rejected() {
        let err = "OPUS_64".parse::<AudioFormat>().unwrap_err();
        assert!(err.contains("OPUS_64"));

        let json = serde_json::from_str::<AudioFormat>("\"WAV\"");
        assert!(json.is_err());
    }

    #[test]
    fn serializes_as_catalog_name() {
        let json = serde_json::to_string(&AudioFormat::OggVorbis320).unwrap();
        assert_eq!(json, "\"OGG_VORBIS_320\"");
        let family = serde_json::to_string(&CodecFamily::Vorbis).unwrap();
        assert_eq!(family, "\"VORBIS\"");
    }

    #[test]
    fn natural_families() {
        assert_eq!(AudioFormat::OggVorbis96.family(), CodecFamily::Vorbis);
        assert_eq!(AudioFormat::Mp3_160Enc.family(), CodecFamily::Mp3);
        assert_eq!(AudioFormat::Aac24Norm.family(), CodecFamily::Aac);
        assert_eq!(AudioFormat::Mp4_256Dual.family(), CodecFamily::Mp4);
        assert_eq!(AudioFormat::Flac24Bit.family(), CodecFamily::Flac);
    }
}
