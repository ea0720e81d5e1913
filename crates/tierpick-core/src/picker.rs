//! Format picking policies.
//!
//! A picker chooses one file from a track's catalog. The only policy shipped
//! here prefers Vorbis at the configured tier and falls back to MP4 at any
//! tier, reporting the compromise through its [`DiagnosticSink`].

use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::QualityError;
use crate::models::{AudioFile, AudioQuality, CodecFamily};

/// Trait for file selection policies.
///
/// Returns a reference into `files`. `Ok(None)` means nothing usable was
/// found, which is a normal outcome; errors are reserved for catalogs the
/// classifier cannot interpret.
pub trait AudioQualityPicker: Send + Sync {
    fn pick_file<'a>(&self, files: &'a [AudioFile]) -> Result<Option<&'a AudioFile>, QualityError>;
}

/// First file in `files` belonging to `family`.
pub fn preferred_file<'a, I>(files: I, family: CodecFamily) -> Option<&'a AudioFile>
where
    I: IntoIterator<Item = &'a AudioFile>,
{
    files.into_iter().find(|f| f.family == family)
}

/// Vorbis at the preferred tier, else MP4 at any tier.
pub struct VorbisOnlyAudioQuality {
    preferred: AudioQuality,
    sink: Arc<dyn DiagnosticSink>,
}

impl VorbisOnlyAudioQuality {
    /// Picker reporting through the `log` facade.
    pub fn new(preferred: AudioQuality) -> Self {
        Self::with_sink(preferred, Arc::new(LogSink))
    }

    pub fn with_sink(preferred: AudioQuality, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { preferred, sink }
    }

    pub fn preferred(&self) -> AudioQuality {
        self.preferred
    }
}

impl AudioQualityPicker for VorbisOnlyAudioQuality {
    fn pick_file<'a>(&self, files: &'a [AudioFile]) -> Result<Option<&'a AudioFile>, QualityError> {
        let matches = self.preferred.matches(files)?;
        if let Some(file) = preferred_file(matches, CodecFamily::Vorbis) {
            return Ok(Some(file));
        }

        // MP4 fallback ignores the tier filter.
        match preferred_file(files, CodecFamily::Mp4) {
            Some(file) => {
                self.sink.emit(&Diagnostic::fallback(file, self.preferred));
                Ok(Some(file))
            }
            None => {
                self.sink.emit(&Diagnostic::none_found(files, self.preferred));
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for VorbisOnlyAudioQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VorbisOnlyAudioQuality")
            .field("preferred", &self.preferred)
            .finish_non_exhaustive()
    }
}
