// Word cursor and cursor context exports

use std::ffi::{CStr, c_char};
use std::ptr;

use dfst_core::abi::{CIndexedWord, CWordContext, CursorHandle, ErrorCallback, Slice};
use dfst_core::error::{ErrorKind, NativeError};
use dfst_core::token::IndexedWord;
use dfst_engine::tokenizer::{OwnedWordIndices, cursor_context};

use crate::error::{contain, guard};
use crate::strings::{borrow_str, free_owned_string, owned_c_str, owned_string};

fn into_cursor(text: &str) -> *mut CursorHandle {
    Box::into_raw(Box::new(OwnedWordIndices::new(text))).cast::<CursorHandle>()
}

// ── Word cursor ─────────────────────────────────────────────────

/// Create a word cursor over a NUL-terminated UTF-8 string.
///
/// Returns null if `utf8` is null or not valid UTF-8. This call has no error
/// channel; `DFST_WordIndices_fromSlice` is the reporting variant.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_WordIndices_new(utf8: *const c_char) -> *mut CursorHandle {
    if utf8.is_null() {
        return ptr::null_mut();
    }
    contain("DFST_WordIndices_new", ptr::null_mut(), || {
        match unsafe { CStr::from_ptr(utf8) }.to_str() {
            Ok(text) => into_cursor(text),
            Err(err) => {
                tracing::warn!(error = %err, "word cursor text is not valid UTF-8");
                ptr::null_mut()
            }
        }
    })
}

/// Create a word cursor over `text`.
///
/// `invalid-input` when the text is not UTF-8 or contains a NUL byte, since
/// cursor words are handed out as C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_WordIndices_fromSlice(
    text: Slice<u8>,
    callback: ErrorCallback,
) -> *mut CursorHandle {
    guard("DFST_WordIndices_fromSlice", callback, ptr::null_mut(), || {
        let text = unsafe { borrow_str(text, "cursor text") }?;
        if let Some(pos) = text.find('\0') {
            return Err(NativeError::new(
                ErrorKind::InvalidInput,
                format!("cursor text contains a NUL byte at {pos}"),
            ));
        }
        Ok(into_cursor(text))
    })
}

/// Advance a cursor.
///
/// Returns 1 and fills `out_index` (byte offset) and `out_word` (caller frees
/// with `DFST_cstr_free`) when there is a next word, 0 at the end. Once it
/// has returned 0 it keeps returning 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_WordIndices_next(
    cursor: *mut CursorHandle,
    out_index: *mut u64,
    out_word: *mut *mut c_char,
) -> u8 {
    contain("DFST_WordIndices_next", 0, || {
        let Some(cursor) = (unsafe { cursor.cast::<OwnedWordIndices>().as_mut() }) else {
            return 0;
        };
        let Some((index, word)) = cursor.next() else {
            return 0;
        };
        unsafe {
            if let Some(out) = out_index.as_mut() {
                *out = index as u64;
            }
            if let Some(out) = out_word.as_mut() {
                *out = owned_c_str(word);
            }
        }
        1
    })
}

/// Release a cursor. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_WordIndices_free(cursor: *mut CursorHandle) {
    if !cursor.is_null() {
        drop(unsafe { Box::from_raw(cursor.cast::<OwnedWordIndices>()) });
    }
}

// ── Cursor context ──────────────────────────────────────────────

fn indexed(word: Option<IndexedWord>) -> CIndexedWord {
    match word {
        Some(word) => CIndexedWord {
            index: word.index as u64,
            value: owned_string(word.word),
        },
        None => CIndexedWord::default(),
    }
}

/// The word under a cursor placed between `first_half` and `second_half`,
/// with up to two words before and after it. Caller frees with
/// `DFST_WordContext_free`.
///
/// Every index, including those of `first_after` and `second_after`, is a
/// byte offset into `first_half` followed by `second_half`. An after-word's
/// offset within `second_half` alone is its index minus `first_half.len`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_Tokenizer_cursorContext(
    first_half: Slice<u8>,
    second_half: Slice<u8>,
    callback: ErrorCallback,
) -> CWordContext {
    guard(
        "DFST_Tokenizer_cursorContext",
        callback,
        CWordContext::default(),
        || {
            let first_half = unsafe { borrow_str(first_half, "text before the cursor") }?;
            let second_half = unsafe { borrow_str(second_half, "text after the cursor") }?;
            let context = cursor_context(first_half, second_half);
            Ok(CWordContext {
                current: indexed(Some(context.current)),
                first_before: indexed(context.first_before),
                second_before: indexed(context.second_before),
                first_after: indexed(context.first_after),
                second_after: indexed(context.second_after),
            })
        },
    )
}

/// Release every word of a cursor context.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_WordContext_free(context: CWordContext) {
    for word in [
        context.current,
        context.first_before,
        context.second_before,
        context.first_after,
        context.second_after,
    ] {
        unsafe { free_owned_string(word.value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DFST_cstr_free;
    use crate::testing::{callback, take_error, view};
    use crate::strings::borrow_bytes;
    use std::ffi::CString;

    fn drain(cursor: *mut CursorHandle) -> Vec<(u64, String)> {
        let mut words = Vec::new();
        loop {
            let mut index = 0u64;
            let mut word: *mut c_char = ptr::null_mut();
            if unsafe { DFST_WordIndices_next(cursor, &mut index, &mut word) } == 0 {
                break;
            }
            let text = unsafe { CStr::from_ptr(word) }.to_str().unwrap().to_string();
            unsafe { DFST_cstr_free(word) };
            words.push((index, text));
        }
        words
    }

    fn expected(pairs: &[(u64, &str)]) -> Vec<(u64, String)> {
        pairs.iter().map(|&(i, w)| (i, w.to_string())).collect()
    }

    #[test]
    fn cursor_over_sentence() {
        let cursor = unsafe { DFST_WordIndices_fromSlice(view("This is a test."), callback()) };
        assert!(!cursor.is_null());
        assert_eq!(
            drain(cursor),
            expected(&[(0, "This"), (5, "is"), (8, "a"), (10, "test"), (14, ".")])
        );
        unsafe { DFST_WordIndices_free(cursor) };
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let cursor = unsafe { DFST_WordIndices_fromSlice(view("sana"), callback()) };
        assert_eq!(drain(cursor).len(), 1);
        let mut index = 7u64;
        let mut word: *mut c_char = ptr::null_mut();
        assert_eq!(unsafe { DFST_WordIndices_next(cursor, &mut index, &mut word) }, 0);
        assert_eq!(index, 7);
        assert!(word.is_null());
        unsafe { DFST_WordIndices_free(cursor) };
    }

    #[test]
    fn empty_text_ends_immediately() {
        let cursor = unsafe { DFST_WordIndices_fromSlice(view(""), callback()) };
        assert!(!cursor.is_null());
        assert!(drain(cursor).is_empty());
        unsafe { DFST_WordIndices_free(cursor) };
    }

    #[test]
    fn abandoned_cursor_is_released() {
        let cursor = unsafe { DFST_WordIndices_fromSlice(view("Mun boahtin odne"), callback()) };
        let mut index = 0u64;
        let mut word: *mut c_char = ptr::null_mut();
        assert!(!cursor.is_null());
        assert_eq!(unsafe { DFST_WordIndices_next(cursor, &mut index, &mut word) }, 1);
        assert_eq!(index, 0);
        assert_eq!(unsafe { CStr::from_ptr(word) }.to_str().unwrap(), "Mun");
        assert_eq!(take_error(), None);
        unsafe {
            DFST_cstr_free(word);
            DFST_WordIndices_free(cursor);
        }
    }

    #[test]
    fn legacy_cursor_matches_slice_cursor() {
        let text = CString::new("Mun boahtin, don bođet.").unwrap();
        let legacy = unsafe { DFST_WordIndices_new(text.as_ptr()) };
        let unified =
            unsafe { DFST_WordIndices_fromSlice(view(text.to_str().unwrap()), callback()) };
        assert_eq!(drain(legacy), drain(unified));
        unsafe {
            DFST_WordIndices_free(legacy);
            DFST_WordIndices_free(unified);
        }
    }

    #[test]
    fn legacy_cursor_fails_silently() {
        assert!(unsafe { DFST_WordIndices_new(ptr::null()) }.is_null());
        let invalid = [0x61u8, 0xff, 0x00];
        let cursor = unsafe { DFST_WordIndices_new(invalid.as_ptr().cast::<c_char>()) };
        assert!(cursor.is_null());
        assert_eq!(take_error(), None);
    }

    #[test]
    fn slice_cursor_reports_invalid_input() {
        let invalid = [0x61u8, 0xff];
        let text = Slice {
            data: invalid.as_ptr().cast_mut(),
            len: invalid.len(),
        };
        let cursor = unsafe { DFST_WordIndices_fromSlice(text, callback()) };
        assert!(cursor.is_null());
        assert_eq!(take_error().unwrap().kind, Some(ErrorKind::InvalidInput));

        let cursor = unsafe { DFST_WordIndices_fromSlice(view("a\0b"), callback()) };
        assert!(cursor.is_null());
        assert_eq!(take_error().unwrap().kind, Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn cursor_context_words_and_indices() {
        let context = unsafe {
            DFST_Tokenizer_cursorContext(view("this is so"), view("me text here"), callback())
        };
        assert_eq!(take_error(), None);
        let read = |word: CIndexedWord| {
            let bytes = unsafe { borrow_bytes(word.value) };
            (word.index, String::from_utf8(bytes.to_vec()).unwrap())
        };
        assert_eq!(read(context.current), (8, "some".to_string()));
        assert_eq!(read(context.first_before), (5, "is".to_string()));
        assert_eq!(read(context.second_before), (0, "this".to_string()));
        assert_eq!(read(context.first_after), (13, "text".to_string()));
        assert_eq!(read(context.second_after), (18, "here".to_string()));
        unsafe { DFST_WordContext_free(context) };
    }

    #[test]
    fn cursor_context_empty_slots_are_null() {
        let context = unsafe { DFST_Tokenizer_cursorContext(view(""), view(""), callback()) };
        assert!(!context.current.value.is_null());
        assert_eq!(context.current.value.len, 0);
        assert!(context.first_before.value.is_null());
        assert!(context.second_after.value.is_null());
        unsafe { DFST_WordContext_free(context) };
    }
}
