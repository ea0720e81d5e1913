//! Picker settings.
//!
//! The only setting is the preferred tier. It comes from a JSON settings file
//! (`{"quality": "high"}`) and can be overridden with `TIERPICK_QUALITY`.
//!
//! The file is `$TIERPICK_SETTINGS` when set, else `~/.tierpick/settings.json`
//! if it exists.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticSink;
use crate::error::CatalogError;
use crate::models::AudioQuality;
use crate::picker::VorbisOnlyAudioQuality;

pub const QUALITY_ENV: &str = "TIERPICK_QUALITY";
pub const SETTINGS_ENV: &str = "TIERPICK_SETTINGS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub quality: AudioQuality,
}

impl PickerSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Settings file, then `TIERPICK_QUALITY`.
    ///
    /// A path named by `TIERPICK_SETTINGS` must exist; the home default is
    /// optional.
    pub fn resolve() -> Result<Self, CatalogError> {
        let base = match std::env::var(SETTINGS_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) => match default_path() {
                Some(path) if path.is_file() => Self::load(path)?,
                _ => Self::default(),
            },
        };
        base.with_env()
    }

    /// Apply `TIERPICK_QUALITY` if set.
    pub fn with_env(mut self) -> Result<Self, CatalogError> {
        if let Ok(raw) = std::env::var(QUALITY_ENV) {
            self.quality = raw.parse().map_err(CatalogError::InvalidSetting)?;
        }
        Ok(self)
    }

    pub fn picker(&self) -> VorbisOnlyAudioQuality {
        VorbisOnlyAudioQuality::new(self.quality)
    }

    pub fn picker_with_sink(&self, sink: Arc<dyn DiagnosticSink>) -> VorbisOnlyAudioQuality {
        VorbisOnlyAudioQuality::with_sink(self.quality, sink)
    }
}

/// `~/.tierpick/settings.json`, when `HOME` is known.
pub fn default_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".tierpick").join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn defaults_to_normal() {
        assert_eq!(PickerSettings::default().quality, AudioQuality::Normal);
        let parsed: PickerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.quality, AudioQuality::Normal);
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"quality": "very_high"}"#).unwrap();

        let settings = PickerSettings::load(&path).unwrap();
        assert_eq!(settings.quality, AudioQuality::VeryHigh);
        assert_eq!(settings.picker().preferred(), AudioQuality::VeryHigh);
    }

    #[test]
    fn invalid_quality_in_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"quality": "lossless"}"#).unwrap();
        assert!(matches!(PickerSettings::load(&path), Err(CatalogError::Json(_))));
    }

    #[test]
    fn env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        std::env::set_var(QUALITY_ENV, "HIGH");
        let settings = PickerSettings::default().with_env().unwrap();
        assert_eq!(settings.quality, AudioQuality::High);

        std::env::set_var(QUALITY_ENV, "ultra");
        let err = PickerSettings::default().with_env().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSetting(_)));

        std::env::remove_var(QUALITY_ENV);
        let settings = PickerSettings { quality: AudioQuality::VeryHigh }
            .with_env()
            .unwrap();
        assert_eq!(settings.quality, AudioQuality::VeryHigh);
    }

    #[test]
    fn resolve_reads_named_file_then_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("picker.json");
        std::fs::write(&path, r#"{"quality": "high"}"#).unwrap();

        std::env::remove_var(QUALITY_ENV);
        std::env::set_var(SETTINGS_ENV, &path);
        assert_eq!(PickerSettings::resolve().unwrap().quality, AudioQuality::High);

        std::env::set_var(QUALITY_ENV, "very_high");
        assert_eq!(PickerSettings::resolve().unwrap().quality, AudioQuality::VeryHigh);
        std::env::remove_var(QUALITY_ENV);

        std::env::set_var(SETTINGS_ENV, dir.path().join("missing.json"));
        assert!(matches!(PickerSettings::resolve(), Err(CatalogError::Io(_))));

        std::env::remove_var(SETTINGS_ENV);
    }

    #[test]
    fn resolve_falls_back_to_home_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let saved_home = std::env::var_os("HOME");
        let home = TempDir::new().expect("tempdir");
        std::env::remove_var(SETTINGS_ENV);
        std::env::remove_var(QUALITY_ENV);
        std::env::set_var("HOME", home.path());

        assert_eq!(PickerSettings::resolve().unwrap().quality, AudioQuality::Normal);

        let path = default_path().unwrap();
        assert_eq!(path, home.path().join(".tierpick").join("settings.json"));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"quality": "very_high"}"#).unwrap();
        assert_eq!(PickerSettings::resolve().unwrap().quality, AudioQuality::VeryHigh);

        match saved_home {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }
    }
}
