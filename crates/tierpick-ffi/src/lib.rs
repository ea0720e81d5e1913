//! C FFI surface for tierpick.
//!
//! Pattern: opaque PickerHandle + C strings + JSON serialization.
//! Catalogs go in as JSON text; the chosen file comes back as JSON.
//! Diagnostics go to the `log` facade of the host process.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use tierpick_core::{parse_catalog, AudioFormat, AudioQuality, AudioQualityPicker, VorbisOnlyAudioQuality};

// ---------------------------------------------------------------------------
// Error handling (thread-local last error)
// ---------------------------------------------------------------------------

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(msg: String) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(msg));
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Returns the last error message (caller frees with `tierpick_string_free`).
#[no_mangle]
pub extern "C" fn tierpick_last_error() -> *mut c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow_mut()
            .take()
            .and_then(|s| CString::new(s).ok())
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut())
    })
}

/// Frees a string returned from tierpick FFI.
///
/// # Safety
/// Must be a pointer returned from this FFI and not already freed.
#[no_mangle]
pub unsafe extern "C" fn tierpick_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct PickerHandle {
    _private: [u8; 0],
}

struct PickerHandleInner {
    picker: VorbisOnlyAudioQuality,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Creates a picker for `quality` (`normal`, `high` or `very_high`).
/// Returns NULL and sets the last error on an unknown quality.
#[no_mangle]
pub extern "C" fn tierpick_picker_new(quality: *const c_char) -> *mut PickerHandle {
    clear_error();
    let raw = match read_cstr(quality) {
        Ok(q) => q,
        Err(e) => {
            set_error(e);
            return ptr::null_mut();
        }
    };
    match raw.parse::<AudioQuality>() {
        Ok(quality) => {
            log::debug!("tierpick: picker opened for {}", quality);
            let picker = VorbisOnlyAudioQuality::new(quality);
            Box::into_raw(Box::new(PickerHandleInner { picker })) as *mut PickerHandle
        }
        Err(e) => {
            set_error(e);
            ptr::null_mut()
        }
    }
}

/// Releases a picker.
#[no_mangle]
pub extern "C" fn tierpick_picker_free(handle: *mut PickerHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle as *mut PickerHandleInner));
        }
    }
}

// ---------------------------------------------------------------------------
// Picking
// ---------------------------------------------------------------------------

/// Picks a file from a JSON catalog. Returns the chosen file as JSON
/// (caller frees).
///
/// NULL with no last error means the catalog had nothing usable.
/// NULL with a last error means the handle, JSON or catalog was invalid.
#[no_mangle]
pub extern "C" fn tierpick_pick_file(
    handle: *mut PickerHandle,
    catalog_json: *const c_char,
) -> *mut c_char {
    clear_error();
    let picker = match picker_ref(handle) {
        Ok(p) => p,
        Err(e) => return err_null(e),
    };
    let json = match read_cstr(catalog_json) {
        Ok(s) => s,
        Err(e) => return err_null(e),
    };
    let files = match parse_catalog(&json) {
        Ok(f) => f,
        Err(e) => return err_null(e.to_string()),
    };

    match picker.pick_file(&files) {
        Ok(Some(file)) => json_to_cstr(file),
        Ok(None) => ptr::null_mut(),
        Err(e) => err_null(e.to_string()),
    }
}

/// Tier index of an encoding name: 0 normal, 1 high, 2 very high.
/// Returns -1 and sets the last error for unknown or unclassified names.
#[no_mangle]
pub extern "C" fn tierpick_classify(format: *const c_char) -> i32 {
    clear_error();
    let name = match read_cstr(format) {
        Ok(s) => s,
        Err(e) => {
            set_error(e);
            return -1;
        }
    };
    let format = match name.parse::<AudioFormat>() {
        Ok(f) => f,
        Err(e) => {
            set_error(e);
            return -1;
        }
    };
    match AudioQuality::classify(format) {
        Ok(quality) => quality as i32,
        Err(e) => {
            set_error(e.to_string());
            -1
        }
    }
}

/// FFI version (bump on breaking changes).
#[no_mangle]
pub extern "C" fn tierpick_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn picker_ref<'a>(handle: *mut PickerHandle) -> Result<&'a VorbisOnlyAudioQuality, String> {
    if handle.is_null() {
        return Err("null picker handle".into());
    }
    let inner = unsafe { &*(handle as *mut PickerHandleInner) };
    Ok(&inner.picker)
}

fn read_cstr(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err("null string pointer".into());
    }
    unsafe {
        CStr::from_ptr(ptr)
            .to_str()
            .map(String::from)
            .map_err(|_| "invalid utf-8".into())
    }
}

fn json_to_cstr<T: serde::Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => to_cstr(json),
        Err(e) => err_null(e.to_string()),
    }
}

fn to_cstr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|c| c.into_raw())
        .unwrap_or(ptr::null_mut())
}

fn err_null(msg: String) -> *mut c_char {
    set_error(msg);
    ptr::null_mut()
}

// ---------------------------------------------------------------------------
// FFI Integration Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Read a *mut c_char into a String and free it.
    fn read_ffi_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null(), "FFI returned null string");
        let s = unsafe { CStr::from_ptr(ptr).to_str().unwrap().to_string() };
        unsafe { tierpick_string_free(ptr) };
        s
    }

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    fn ffi_picker(quality: &str) -> *mut PickerHandle {
        let handle = tierpick_picker_new(c(quality).as_ptr());
        assert!(!handle.is_null(), "tierpick_picker_new returned null");
        handle
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    #[test]
    fn ffi_version() {
        assert_eq!(tierpick_version(), 1);
    }

    #[test]
    fn ffi_new_free_lifecycle() {
        let handle = ffi_picker("high");
        tierpick_picker_free(handle);
        tierpick_picker_free(ptr::null_mut());
    }

    #[test]
    fn ffi_unknown_quality_rejected() {
        let handle = tierpick_picker_new(c("lossless").as_ptr());
        assert!(handle.is_null());
        let msg = read_ffi_string(tierpick_last_error());
        assert!(msg.contains("lossless"));
    }

    #[test]
    fn ffi_null_handle_returns_error() {
        let catalog = c("[]");
        let ptr = tierpick_pick_file(ptr::null_mut(), catalog.as_ptr());
        assert!(ptr.is_null());
        let msg = read_ffi_string(tierpick_last_error());
        assert!(msg.contains("null"));
    }

    // -------------------------------------------------------------------
    // Picking
    // -------------------------------------------------------------------

    #[test]
    fn ffi_pick_vorbis() {
        let handle = ffi_picker("high");
        let catalog = c(r#"[
            {"file_id": "m", "format": "MP4_128"},
            {"file_id": "v", "format": "OGG_VORBIS_160"}
        ]"#);

        let json = read_ffi_string(tierpick_pick_file(handle, catalog.as_ptr()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file_id"], "v");
        assert_eq!(value["format"], "OGG_VORBIS_160");
        assert_eq!(value["family"], "VORBIS");

        tierpick_picker_free(handle);
    }

    #[test]
    fn ffi_nothing_usable_is_null_without_error() {
        let handle = ffi_picker("normal");
        let catalog = c(r#"[{"file_id": "a", "format": "AAC_48"}]"#);

        let ptr = tierpick_pick_file(handle, catalog.as_ptr());
        assert!(ptr.is_null());
        assert!(tierpick_last_error().is_null());

        tierpick_picker_free(handle);
    }

    #[test]
    fn ffi_unclassified_catalog_sets_error() {
        let handle = ffi_picker("normal");
        let catalog = c(r#"[{"file_id": "f", "format": "FLAC_FLAC"}]"#);

        let ptr = tierpick_pick_file(handle, catalog.as_ptr());
        assert!(ptr.is_null());
        let msg = read_ffi_string(tierpick_last_error());
        assert!(msg.contains("FLAC_FLAC"));

        tierpick_picker_free(handle);
    }

    #[test]
    fn ffi_bad_json_sets_error() {
        let handle = ffi_picker("normal");
        let ptr = tierpick_pick_file(handle, c("{not json").as_ptr());
        assert!(ptr.is_null());
        assert!(!read_ffi_string(tierpick_last_error()).is_empty());
        tierpick_picker_free(handle);
    }

    // -------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------

    #[test]
    fn ffi_classify() {
        assert_eq!(tierpick_classify(c("OGG_VORBIS_96").as_ptr()), 0);
        assert_eq!(tierpick_classify(c("MP3_160_ENC").as_ptr()), 1);
        assert_eq!(tierpick_classify(c("AAC_48").as_ptr()), 2);
    }

    #[test]
    fn ffi_classify_failures() {
        assert_eq!(tierpick_classify(c("MP4_256").as_ptr()), -1);
        assert!(read_ffi_string(tierpick_last_error()).contains("MP4_256"));

        assert_eq!(tierpick_classify(c("OPUS_64").as_ptr()), -1);
        assert!(read_ffi_string(tierpick_last_error()).contains("OPUS_64"));

        assert_eq!(tierpick_classify(ptr::null()), -1);
    }
}
