// Suggestion collection exports
//
// A collection is handed out as a boxed slice. Accessors read one element at
// a time; the host never sees the `Suggestion` layout.

use std::ptr;
use std::slice;

use dfst_core::abi::{ErrorCallback, Slice};
use dfst_core::error::{ErrorKind, NativeError};
use dfst_core::suggestion::{Suggestion, completed_to_byte};

use crate::error::guard;
use crate::strings::owned_string;

/// Hand `list` to the caller. An empty list is the null slice.
pub(crate) fn owned_suggestions(list: Vec<Suggestion>) -> Slice<Suggestion> {
    if list.is_empty() {
        return Slice::null();
    }
    let boxed = list.into_boxed_slice();
    let len = boxed.len();
    Slice {
        data: Box::into_raw(boxed).cast::<Suggestion>(),
        len,
    }
}

/// # Safety
/// `list` must be null or come from `owned_suggestions` and still be live.
unsafe fn borrow_suggestions<'a>(list: Slice<Suggestion>) -> &'a [Suggestion] {
    if list.data.is_null() {
        return &[];
    }
    unsafe { slice::from_raw_parts(list.data, list.len) }
}

fn item(list: &[Suggestion], index: usize) -> Result<&Suggestion, NativeError> {
    list.get(index).ok_or_else(|| {
        NativeError::new(
            ErrorKind::Index,
            format!("index {index} out of range for {} suggestions", list.len()),
        )
    })
}

/// Number of suggestions in a collection.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_VecSuggestion_len(
    list: Slice<Suggestion>,
    callback: ErrorCallback,
) -> usize {
    guard("DFST_VecSuggestion_len", callback, 0, || {
        Ok(unsafe { borrow_suggestions(list) }.len())
    })
}

/// Text of suggestion `index`. Caller frees with `DFST_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_VecSuggestion_getValue(
    list: Slice<Suggestion>,
    index: usize,
    callback: ErrorCallback,
) -> Slice<u8> {
    guard("DFST_VecSuggestion_getValue", callback, Slice::null(), || {
        let list = unsafe { borrow_suggestions(list) };
        Ok(owned_string(item(list, index)?.value.clone()))
    })
}

/// Weight of suggestion `index`. Lower is better.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_VecSuggestion_getWeight(
    list: Slice<Suggestion>,
    index: usize,
    callback: ErrorCallback,
) -> f32 {
    guard("DFST_VecSuggestion_getWeight", callback, 0.0, || {
        let list = unsafe { borrow_suggestions(list) };
        Ok(item(list, index)?.weight)
    })
}

/// Completion of suggestion `index`: 0 unknown, 1 incomplete, 2 complete.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_VecSuggestion_getCompleted(
    list: Slice<Suggestion>,
    index: usize,
    callback: ErrorCallback,
) -> u8 {
    guard("DFST_VecSuggestion_getCompleted", callback, 0, || {
        let list = unsafe { borrow_suggestions(list) };
        Ok(completed_to_byte(item(list, index)?.completed))
    })
}

/// Release a suggestion collection. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_VecSuggestion_free(list: Slice<Suggestion>) {
    if list.data.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(list.data, list.len)) });
}
