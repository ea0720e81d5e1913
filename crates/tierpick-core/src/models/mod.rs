//! tierpick data models.
//!
//! Closed enums for everything a catalog can say about an encoding, so an
//! unrecognized value fails at construction instead of flowing through.

pub mod file;
pub mod format;
pub mod quality;

pub use file::AudioFile;
pub use format::{AudioFormat, CodecFamily};
pub use quality::AudioQuality;
