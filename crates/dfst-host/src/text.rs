// Borrowed text views in, owned text out
//
// `BufferView` ties a raw view to the lifetime of the borrowed text, so the
// text cannot be dropped while a call might read it. `OwnedText` and
// `OwnedCStr` release what the boundary handed out, exactly once, on drop.

use std::borrow::Cow;
use std::ffi::{CStr, c_char};
use std::marker::PhantomData;
use std::slice;

use dfst_core::abi::Slice;

use crate::Library;

pub(crate) struct BufferView<'a> {
    raw: Slice<u8>,
    _text: PhantomData<&'a [u8]>,
}

impl<'a> BufferView<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            // The boundary only reads through input views.
            raw: Slice {
                data: text.as_ptr().cast_mut(),
                len: text.len(),
            },
            _text: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> Slice<u8> {
        self.raw
    }
}

/// Text owned by the boundary, released with `DFST_string_free`.
pub(crate) struct OwnedText<'l> {
    library: &'l Library,
    raw: Slice<u8>,
}

impl<'l> OwnedText<'l> {
    /// # Safety
    /// `raw` must be null or text returned by a boundary call of `library`
    /// that nothing else releases.
    pub(crate) unsafe fn new(library: &'l Library, raw: Slice<u8>) -> Self {
        Self { library, raw }
    }

    pub(crate) fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        if self.raw.is_null() || self.raw.len == 0 {
            return &[];
        }
        // SAFETY: the boundary handed out `len` bytes that stay valid until
        // released in `drop`.
        unsafe { slice::from_raw_parts(self.raw.data, self.raw.len) }
    }

    pub(crate) fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl Drop for OwnedText<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { (self.library.api().string_free)(self.raw) };
        }
    }
}

/// NUL-terminated text owned by the boundary, released with `DFST_cstr_free`.
pub(crate) struct OwnedCStr<'l> {
    library: &'l Library,
    raw: *mut c_char,
}

impl<'l> OwnedCStr<'l> {
    /// # Safety
    /// `raw` must be null or a string returned by a boundary call of
    /// `library` that nothing else releases.
    pub(crate) unsafe fn new(library: &'l Library, raw: *mut c_char) -> Self {
        Self { library, raw }
    }

    pub(crate) fn to_string_lossy(&self) -> Cow<'_, str> {
        if self.raw.is_null() {
            return Cow::Borrowed("");
        }
        // SAFETY: non-null and NUL-terminated until released in `drop`.
        unsafe { CStr::from_ptr(self.raw) }.to_string_lossy()
    }
}

impl Drop for OwnedCStr<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { (self.library.api().cstr_free)(self.raw) };
        }
    }
}
