// Borrowed text views in, owned text out

use std::ffi::{CString, c_char};
use std::ptr;
use std::slice;

use dfst_core::abi::Slice;
use dfst_core::error::{ErrorKind, NativeError};

/// Bytes behind a borrowed view. A null view reads as empty.
///
/// # Safety
/// A non-null `view` must point at `len` readable bytes for `'a`.
pub(crate) unsafe fn borrow_bytes<'a>(view: Slice<u8>) -> &'a [u8] {
    if view.data.is_null() || view.len == 0 {
        return &[];
    }
    unsafe { slice::from_raw_parts(view.data, view.len) }
}

/// Text behind a borrowed view, checked to be UTF-8.
///
/// # Safety
/// As for [`borrow_bytes`].
pub(crate) unsafe fn borrow_str<'a>(view: Slice<u8>, what: &str) -> Result<&'a str, NativeError> {
    let bytes = unsafe { borrow_bytes(view) };
    std::str::from_utf8(bytes).map_err(|e| {
        NativeError::new(ErrorKind::InvalidInput, format!("{what} is not valid UTF-8: {e}"))
    })
}

/// Hand `text` to the caller. Released with `DFST_string_free`.
pub(crate) fn owned_string(text: String) -> Slice<u8> {
    let bytes = text.into_bytes().into_boxed_slice();
    let len = bytes.len();
    Slice {
        data: Box::into_raw(bytes).cast::<u8>(),
        len,
    }
}

/// Release text returned by `owned_string`.
///
/// # Safety
/// `text` must be null or come from `owned_string`, and not be released twice.
pub(crate) unsafe fn free_owned_string(text: Slice<u8>) {
    if text.data.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(text.data, text.len)) });
}

/// Hand `text` to the caller as a NUL-terminated string. Released with
/// `DFST_cstr_free`.
pub(crate) fn owned_c_str(text: String) -> *mut c_char {
    CString::new(text).unwrap_or_default().into_raw()
}

// ── Exports ─────────────────────────────────────────────────────

/// Free text returned by any `DFST_*` call that returns `Slice<u8>`.
/// Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_string_free(text: Slice<u8>) {
    unsafe { free_owned_string(text) }
}

/// Free a string returned through `DFST_WordIndices_next`. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_cstr_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
