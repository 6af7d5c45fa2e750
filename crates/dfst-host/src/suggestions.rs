// Suggestion collections handed out by the boundary

use std::iter::FusedIterator;

use dfst_core::suggestion::{Suggestion, completed_from_byte};

use crate::api::RawSuggestions;
use crate::channel::ErrorChannel;
use crate::text::OwnedText;
use crate::{Error, Library, Result};

/// Ranked suggestions, best first. Elements are read from the native
/// collection on access; the collection is released when dropped.
pub struct SuggestionList<'l> {
    library: &'l Library,
    raw: RawSuggestions,
    len: usize,
}

impl<'l> SuggestionList<'l> {
    /// Take ownership of `raw` without calling into the boundary.
    ///
    /// # Safety
    /// `raw` must be null or a collection returned by `library` that nothing
    /// else releases.
    pub(crate) unsafe fn new(library: &'l Library, raw: RawSuggestions) -> Self {
        Self {
            library,
            raw,
            len: 0,
        }
    }

    /// Read the length. A null collection is empty.
    pub(crate) fn counted(mut self) -> Result<Self> {
        if !self.raw.is_null() {
            let (api, raw) = (self.library.api(), self.raw);
            self.len = ErrorChannel::call(|cb| unsafe { (api.vec_len)(raw, cb) })?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Text of suggestion `index`.
    pub fn value_at(&self, index: usize) -> Result<String> {
        let library = self.library;
        let raw = self.raw;
        let text = ErrorChannel::call(|cb| unsafe {
            OwnedText::new(library, (library.api().vec_value)(raw, index, cb))
        })?;
        if text.is_null() {
            return Err(Error::Allocation("suggestion value"));
        }
        Ok(text.to_string_lossy().into_owned())
    }

    pub fn weight_at(&self, index: usize) -> Result<f32> {
        let (api, raw) = (self.library.api(), self.raw);
        ErrorChannel::call(|cb| unsafe { (api.vec_weight)(raw, index, cb) })
    }

    /// Completion of suggestion `index`; `None` when the engine does not know.
    pub fn completed_at(&self, index: usize) -> Result<Option<bool>> {
        let (api, raw) = (self.library.api(), self.raw);
        let byte = ErrorChannel::call(|cb| unsafe { (api.vec_completed)(raw, index, cb) })?;
        Ok(completed_from_byte(byte))
    }

    /// Suggestion `index` with all of its fields.
    pub fn get(&self, index: usize) -> Result<Suggestion> {
        Ok(Suggestion::new(
            self.value_at(index)?,
            self.weight_at(index)?,
            self.completed_at(index)?,
        ))
    }

    pub fn iter(&self) -> SuggestionIter<'_, 'l> {
        SuggestionIter {
            list: self,
            next: 0,
        }
    }

    /// Copy every suggestion out.
    pub fn to_vec(&self) -> Result<Vec<Suggestion>> {
        self.iter().collect()
    }
}

impl Drop for SuggestionList<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { (self.library.api().vec_free)(self.raw) };
        }
    }
}

impl std::fmt::Debug for SuggestionList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionList")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<'a, 'l> IntoIterator for &'a SuggestionList<'l> {
    type Item = Result<Suggestion>;
    type IntoIter = SuggestionIter<'a, 'l>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`SuggestionList`], in rank order.
pub struct SuggestionIter<'a, 'l> {
    list: &'a SuggestionList<'l>,
    next: usize,
}

impl Iterator for SuggestionIter<'_, '_> {
    type Item = Result<Suggestion>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.list.len() {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.list.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SuggestionIter<'_, '_> {}
impl FusedIterator for SuggestionIter<'_, '_> {}
