// Word context around a text cursor

use dfst_core::abi::{CIndexedWord, CWordContext};
use dfst_core::token::{IndexedWord, WordContext};

use crate::channel::ErrorChannel;
use crate::text::BufferView;
use crate::{Library, Result};

// Releases a native context however the conversion ends.
struct ContextGuard<'l> {
    library: &'l Library,
    raw: CWordContext,
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        unsafe { (self.library.api().word_context_free)(self.raw) };
    }
}

fn read_word(word: &CIndexedWord) -> Option<IndexedWord> {
    if word.value.is_null() {
        return None;
    }
    let bytes = if word.value.len == 0 {
        &[][..]
    } else {
        // SAFETY: non-null values are owned by the context until it is freed.
        unsafe { std::slice::from_raw_parts(word.value.data, word.value.len) }
    };
    Some(IndexedWord::new(
        word.index as usize,
        String::from_utf8_lossy(bytes).into_owned(),
    ))
}

impl Library {
    /// The word under a cursor placed between `first_half` and
    /// `second_half`, with up to two words on either side.
    ///
    /// Indices are byte offsets into `first_half` followed by `second_half`.
    pub fn cursor_context(&self, first_half: &str, second_half: &str) -> Result<WordContext> {
        let first = BufferView::new(first_half);
        let second = BufferView::new(second_half);
        let api = self.api();
        let guard =
            ErrorChannel::call(|cb| unsafe { (api.cursor_context)(first.raw(), second.raw(), cb) })
                .map(|raw| ContextGuard { library: self, raw })?;
        let raw = &guard.raw;

        Ok(WordContext {
            current: read_word(&raw.current).unwrap_or_else(|| IndexedWord::new(0, "")),
            first_before: read_word(&raw.first_before),
            second_before: read_word(&raw.second_before),
            first_after: read_word(&raw.first_after),
            second_after: read_word(&raw.second_after),
        })
    }
}
