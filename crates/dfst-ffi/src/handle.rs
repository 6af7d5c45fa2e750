// Opaque handles: boxed shared trait objects behind a `RawHandle`
//
// `data` points at a heap cell holding an `Arc<dyn Trait>`; `vtable` points at
// the one static `HandleVtable` of that handle kind. The vtable address is
// what identifies the kind, so a speller handle handed to an archive call is
// rejected instead of being misread.

use std::ffi::c_void;

use dfst_core::abi::RawHandle;
use dfst_core::error::{ErrorKind, NativeError};
use dfst_engine::archive::SpellerArchive;
use dfst_engine::speller::Speller;

pub(crate) type ArchiveRef = std::sync::Arc<dyn SpellerArchive + Send + Sync>;
pub(crate) type SpellerRef = std::sync::Arc<dyn Speller + Send + Sync>;

/// Kind tag of a handle's operation table.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandleKind {
    Archive = 1,
    Speller = 2,
}

/// Operation table a `RawHandle` points at.
#[repr(C)]
#[derive(Debug)]
pub(crate) struct HandleVtable {
    pub(crate) kind: HandleKind,
    /// Drops the heap cell behind `data`.
    pub(crate) release: unsafe extern "C" fn(data: *mut c_void),
}

unsafe extern "C" fn release_archive(data: *mut c_void) {
    drop(unsafe { Box::from_raw(data.cast::<ArchiveRef>()) });
}

unsafe extern "C" fn release_speller(data: *mut c_void) {
    drop(unsafe { Box::from_raw(data.cast::<SpellerRef>()) });
}

static ARCHIVE_VTABLE: HandleVtable = HandleVtable {
    kind: HandleKind::Archive,
    release: release_archive,
};

static SPELLER_VTABLE: HandleVtable = HandleVtable {
    kind: HandleKind::Speller,
    release: release_speller,
};

/// A value that can travel as a `RawHandle`.
pub(crate) trait Opaque: Sized {
    const NAME: &'static str;

    fn vtable() -> &'static HandleVtable;

    fn into_raw(self) -> RawHandle {
        RawHandle {
            data: Box::into_raw(Box::new(self)).cast::<c_void>(),
            vtable: (Self::vtable() as *const HandleVtable).cast::<c_void>(),
        }
    }

    /// Check that `raw` is a live handle of this kind.
    fn check(raw: RawHandle) -> Result<(), NativeError> {
        if raw.is_null() {
            return Err(NativeError::new(
                ErrorKind::InvalidHandle,
                format!("null {} handle", Self::NAME),
            ));
        }
        if raw.vtable != (Self::vtable() as *const HandleVtable).cast::<c_void>() {
            return Err(NativeError::new(
                ErrorKind::InvalidHandle,
                format!("handle is not a {} handle", Self::NAME),
            ));
        }
        Ok(())
    }

    /// Borrow the value behind `raw`.
    ///
    /// # Safety
    /// `raw` must be null, or a handle produced by `into_raw` of some kind that
    /// has not been released yet.
    unsafe fn borrow_raw<'a>(raw: RawHandle) -> Result<&'a Self, NativeError> {
        Self::check(raw)?;
        Ok(unsafe { &*raw.data.cast::<Self>() })
    }

    /// Release the value behind `raw` through its vtable.
    ///
    /// # Safety
    /// As for `borrow_raw`; `raw` must not be used afterwards.
    unsafe fn release_raw(raw: RawHandle) -> Result<(), NativeError> {
        Self::check(raw)?;
        tracing::trace!(kind = ?Self::vtable().kind, "releasing handle");
        unsafe { (Self::vtable().release)(raw.data) };
        Ok(())
    }
}

impl Opaque for ArchiveRef {
    const NAME: &'static str = "archive";

    fn vtable() -> &'static HandleVtable {
        &ARCHIVE_VTABLE
    }
}

impl Opaque for SpellerRef {
    const NAME: &'static str = "speller";

    fn vtable() -> &'static HandleVtable {
        &SPELLER_VTABLE
    }
}
