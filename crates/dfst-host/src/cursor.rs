// Word cursor as an iterator

use std::ffi::{CString, c_char};
use std::iter::FusedIterator;
use std::ptr;

use dfst_core::abi::CursorHandle;

use crate::channel::ErrorChannel;
use crate::text::{BufferView, OwnedCStr};
use crate::{Error, Library, Result};

/// Words of a text with their byte offsets, read through a native cursor.
///
/// Yields every run of non-whitespace in order. The cursor is released when
/// the iterator is dropped.
pub struct WordIndices<'l> {
    library: &'l Library,
    raw: *mut CursorHandle,
    done: bool,
}

impl<'l> WordIndices<'l> {
    /// Cursor over `text`. Text containing a NUL byte is rejected.
    pub fn new(library: &'l Library, text: &str) -> Result<Self> {
        let view = BufferView::new(text);
        let api = library.api();
        let raw = ErrorChannel::call(|cb| unsafe { (api.word_indices_from_slice)(view.raw(), cb) })?;
        Self::from_raw(library, raw)
    }

    /// Cursor created through the NUL-terminated entry point, which reports
    /// no error detail.
    pub fn from_c_str(library: &'l Library, text: &str) -> Result<Self> {
        let text = CString::new(text)?;
        let raw = unsafe { (library.api().word_indices_new)(text.as_ptr()) };
        Self::from_raw(library, raw)
    }

    fn from_raw(library: &'l Library, raw: *mut CursorHandle) -> Result<Self> {
        if raw.is_null() {
            return Err(Error::Allocation("word cursor"));
        }
        Ok(Self {
            library,
            raw,
            done: false,
        })
    }
}

impl Iterator for WordIndices<'_> {
    type Item = (u64, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut index = 0u64;
        let mut word: *mut c_char = ptr::null_mut();
        let more = unsafe { (self.library.api().word_indices_next)(self.raw, &mut index, &mut word) };
        // SAFETY: `word` is null or was just handed over by the cursor.
        let word = unsafe { OwnedCStr::new(self.library, word) };
        if more == 0 {
            self.done = true;
            return None;
        }
        Some((index, word.to_string_lossy().into_owned()))
    }
}

impl FusedIterator for WordIndices<'_> {}

impl Drop for WordIndices<'_> {
    fn drop(&mut self) {
        unsafe { (self.library.api().word_indices_free)(self.raw) };
    }
}

impl std::fmt::Debug for WordIndices<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordIndices")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl Library {
    /// A word cursor over `text`.
    pub fn word_indices(&self, text: &str) -> Result<WordIndices<'_>> {
        WordIndices::new(self, text)
    }

    /// Every word of `text` with its byte offset.
    pub fn tokenize(&self, text: &str) -> Result<Vec<(u64, String)>> {
        Ok(self.word_indices(text)?.collect())
    }
}
