// Value shapes that cross the C boundary.
//
// Everything here is `#[repr(C)]` and `Copy`: values are passed by value in
// both directions and ownership is described by the function that produced
// them, never by the type itself.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::ptr;

/// Pointer + length view over a run of `T`.
///
/// Used both for borrowed inputs (valid for the duration of one call) and for
/// owned results (released with the matching `*_free` function). A null `data`
/// pointer with zero length means "no value".
#[repr(C)]
#[derive(Debug)]
pub struct Slice<T> {
    pub data: *mut T,
    pub len: usize,
}

impl<T> Slice<T> {
    /// The "no value" sentinel.
    pub const fn null() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<T> {}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// Fat pointer to a native object: a data pointer plus a pointer to the
/// operation table that knows how to use and release it.
///
/// A null `data` pointer is the canonical "invalid/failed" sentinel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHandle {
    pub data: *mut c_void,
    pub vtable: *const c_void,
}

impl RawHandle {
    pub const fn null() -> Self {
        Self {
            data: ptr::null_mut(),
            vtable: ptr::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

impl Default for RawHandle {
    fn default() -> Self {
        Self::null()
    }
}

/// Error channel callback: receives a UTF-8 message (not NUL-terminated).
///
/// Invoked at most once per failing call, synchronously, before the call
/// returns. `None` is a null function pointer and silences reporting.
pub type ErrorCallback = Option<unsafe extern "C" fn(message: *const u8, len: usize)>;

/// Opaque word cursor state. Only ever seen behind a pointer.
#[repr(C)]
pub struct CursorHandle {
    _private: [u8; 0],
    _marker: PhantomData<(*mut u8, std::marker::PhantomPinned)>,
}

/// Suggestion tuning passed by pointer to `DFST_Speller_suggestWithConfig`.
///
/// Zero in `n_best`, `max_weight` or `beam` means "no limit"; zero in
/// `lookup_budget` keeps the default budget. `recase` is a boolean byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FfiSpellerConfig {
    pub n_best: usize,
    pub max_weight: f32,
    pub beam: f32,
    pub lookup_budget: usize,
    pub recase: u8,
}

impl Default for FfiSpellerConfig {
    fn default() -> Self {
        Self {
            n_best: 0,
            max_weight: 0.0,
            beam: 0.0,
            lookup_budget: 0,
            recase: 1,
        }
    }
}

/// One word of a cursor context. `value` is owned; a null `value` means the
/// slot is empty.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct CIndexedWord {
    pub index: u64,
    pub value: Slice<u8>,
}

/// Word under a text cursor plus up to two neighbours on each side.
/// Released as a whole with `DFST_WordContext_free`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct CWordContext {
    pub current: CIndexedWord,
    pub first_before: CIndexedWord,
    pub second_before: CIndexedWord,
    pub first_after: CIndexedWord,
    pub second_after: CIndexedWord,
}
