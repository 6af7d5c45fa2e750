// Archive exports

use dfst_core::abi::{ErrorCallback, RawHandle, Slice};

use crate::error::{contain, guard};
use crate::handle::{ArchiveRef, Opaque};
use crate::strings::{borrow_str, owned_string};

/// Open the speller archive at `path` (UTF-8, not NUL-terminated).
///
/// Returns a null handle on failure; `io` when the file cannot be read,
/// `format` when it is malformed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_SpellerArchive_open(
    path: Slice<u8>,
    callback: ErrorCallback,
) -> RawHandle {
    guard("DFST_SpellerArchive_open", callback, RawHandle::null(), || {
        let path = unsafe { borrow_str(path, "archive path") }?;
        let archive: ArchiveRef = dfst_engine::archive::open(path)?;
        Ok(archive.into_raw())
    })
}

/// Get the speller of an archive.
///
/// Release the speller handle with `DFST_Speller_free`; it stays valid after
/// the archive handle is released. `unsupported` when the archive holds no
/// speller.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_SpellerArchive_speller(
    handle: RawHandle,
    callback: ErrorCallback,
) -> RawHandle {
    guard("DFST_SpellerArchive_speller", callback, RawHandle::null(), || {
        let archive = unsafe { ArchiveRef::borrow_raw(handle) }?;
        Ok(archive.speller()?.into_raw())
    })
}

/// Get the archive's locale tag. Caller frees with `DFST_string_free`.
///
/// `missing-metadata` when the archive has no locale.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_SpellerArchive_locale(
    handle: RawHandle,
    callback: ErrorCallback,
) -> Slice<u8> {
    guard("DFST_SpellerArchive_locale", callback, Slice::null(), || {
        let archive = unsafe { ArchiveRef::borrow_raw(handle) }?;
        Ok(owned_string(archive.locale()?.to_string()))
    })
}

/// Release an archive handle. Null is a no-op; a handle of another kind is
/// left alone.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_SpellerArchive_free(handle: RawHandle) {
    if handle.is_null() {
        return;
    }
    contain("DFST_SpellerArchive_free", (), || {
        if let Err(err) = unsafe { ArchiveRef::release_raw(handle) } {
            tracing::warn!(error = %err, "archive handle not released");
        }
    })
}
