//! tierpick-core — choose one audio encoding from a track catalog.
//!
//! A catalog lists the encodings available for a track. The picker keeps the
//! ones at the configured quality tier, prefers Vorbis among them, and falls
//! back to MP4 at any tier when it has to.
//!
//! # Architecture
//!
//! ```text
//! catalog ──► AudioQuality::matches (tier filter)
//!         ──► preferred_file(VORBIS)
//!         ──► preferred_file(MP4) over the full catalog, with a diagnostic
//!         ──► Option<&AudioFile>
//! ```
//!
//! Nothing here fetches or decodes audio.

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod picker;
pub mod settings;

pub use catalog::{load_catalog, parse_catalog};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink, Severity};
pub use error::{CatalogError, QualityError};
pub use models::*;
pub use picker::{preferred_file, AudioQualityPicker, VorbisOnlyAudioQuality};
pub use settings::PickerSettings;
