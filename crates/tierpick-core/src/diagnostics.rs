//! Diagnostics emitted when the picker has to compromise.
//!
//! The picker never logs directly. It reports to a [`DiagnosticSink`] so the
//! host decides where diagnostics go and tests can inspect them.

use std::fmt;

use parking_lot::Mutex;

use crate::models::{AudioFile, AudioFormat, AudioQuality};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Fatal,
}

/// Something the caller's logs should show about a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The preferred tier had no Vorbis file; an MP4 file of any tier was used.
    Fallback {
        file_id: String,
        format: Option<AudioFormat>,
        preferred: AudioQuality,
    },
    /// Neither the preferred path nor the fallback produced a file.
    NoneFound {
        preferred: AudioQuality,
        available: Vec<String>,
    },
}

impl Diagnostic {
    pub fn fallback(file: &AudioFile, preferred: AudioQuality) -> Self {
        Self::Fallback {
            file_id: file.file_id.clone(),
            format: file.format,
            preferred,
        }
    }

    pub fn none_found(files: &[AudioFile], preferred: AudioQuality) -> Self {
        Self::NoneFound {
            preferred,
            available: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Fallback { .. } => Severity::Warning,
            Self::NoneFound { .. } => Severity::Fatal,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback {
                file_id,
                format,
                preferred,
            } => {
                let used = format.map(AudioFormat::name).unwrap_or("unspecified MP4");
                write!(
                    f,
                    "using {} ({}) because preferred {} couldn't be found",
                    used, file_id, preferred
                )
            }
            Self::NoneFound {
                preferred,
                available,
            } => {
                if available.is_empty() {
                    write!(f, "couldn't find any {} audio file, catalog is empty", preferred)
                } else {
                    write!(
                        f,
                        "couldn't find any {} audio file, available: [{}]",
                        preferred,
                        available.join(", ")
                    )
                }
            }
        }
    }
}

/// Receiver for picker diagnostics.
///
/// Implementations must be shareable across threads; the picker itself holds
/// no mutable state.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
///
/// Warnings go to `log::warn!`, fatal diagnostics to `log::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

pub const LOG_TARGET: &str = "tierpick::picker";

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => log::warn!(target: LOG_TARGET, "tierpick: {}", diagnostic),
            Severity::Fatal => log::error!(target: LOG_TARGET, "tierpick: {}", diagnostic),
        }
    }
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}
