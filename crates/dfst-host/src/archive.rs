// Owned archive and speller handles

use std::path::Path;
use std::sync::Arc;

use dfst_core::abi::RawHandle;

use crate::channel::ErrorChannel;
use crate::suggestions::SuggestionList;
use crate::text::{BufferView, OwnedText};
use crate::{Error, Library, Result, SuggestOptions};

/// An opened speller archive. Released when dropped.
pub struct SpellerArchive {
    library: Arc<Library>,
    raw: RawHandle,
}

// SAFETY: native archives are shareable across threads, and every call on
// them is independent.
unsafe impl Send for SpellerArchive {}
unsafe impl Sync for SpellerArchive {}

impl SpellerArchive {
    /// Open the archive at `path`.
    pub fn open(library: Arc<Library>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = path.to_str().ok_or_else(|| {
            Error::InvalidInput(format!("archive path `{}` is not valid UTF-8", path.display()))
        })?;
        let view = BufferView::new(path);
        let raw = ErrorChannel::call(|cb| unsafe { (library.api().archive_open)(view.raw(), cb) })?;
        if raw.is_null() {
            return Err(Error::Allocation("archive handle"));
        }
        tracing::debug!(path, "opened speller archive");
        Ok(Self { library, raw })
    }

    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// The archive's speller. It borrows the archive, so the archive cannot
    /// be dropped first.
    pub fn speller(&self) -> Result<Speller<'_>> {
        let raw = ErrorChannel::call(|cb| unsafe {
            (self.library.api().archive_speller)(self.raw, cb)
        })?;
        if raw.is_null() {
            return Err(Error::Allocation("speller handle"));
        }
        Ok(Speller { archive: self, raw })
    }

    /// The archive's locale tag, e.g. `se`.
    pub fn locale(&self) -> Result<String> {
        let library = &*self.library;
        let text = ErrorChannel::call(|cb| unsafe {
            OwnedText::new(library, (library.api().archive_locale)(self.raw, cb))
        })?;
        if text.is_null() {
            return Err(Error::Allocation("locale"));
        }
        Ok(text.to_string_lossy().into_owned())
    }
}

impl Drop for SpellerArchive {
    fn drop(&mut self) {
        unsafe { (self.library.api().archive_free)(self.raw) };
    }
}

impl std::fmt::Debug for SpellerArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellerArchive").finish_non_exhaustive()
    }
}

/// A speller borrowed from its archive. Released when dropped.
pub struct Speller<'a> {
    archive: &'a SpellerArchive,
    raw: RawHandle,
}

// SAFETY: as for `SpellerArchive`.
unsafe impl Send for Speller<'_> {}
unsafe impl Sync for Speller<'_> {}

impl<'a> Speller<'a> {
    fn library(&self) -> &'a Library {
        &self.archive.library
    }

    pub fn is_correct(&self, word: &str) -> Result<bool> {
        let view = BufferView::new(word);
        let api = self.library().api();
        let result =
            ErrorChannel::call(|cb| unsafe { (api.speller_is_correct)(self.raw, view.raw(), cb) })?;
        Ok(result != 0)
    }

    /// Ranked suggestions for `word`, best first.
    pub fn suggest(&self, word: &str) -> Result<SuggestionList<'a>> {
        let library = self.library();
        let view = BufferView::new(word);
        let list = ErrorChannel::call(|cb| unsafe {
            SuggestionList::new(library, (library.api().speller_suggest)(self.raw, view.raw(), cb))
        })?;
        list.counted()
    }

    /// Like [`suggest`](Self::suggest), tuned by `options`.
    pub fn suggest_with(&self, word: &str, options: &SuggestOptions) -> Result<SuggestionList<'a>> {
        let library = self.library();
        let view = BufferView::new(word);
        let config = options.to_ffi();
        let list = ErrorChannel::call(|cb| unsafe {
            SuggestionList::new(
                library,
                (library.api().speller_suggest_with_config)(self.raw, view.raw(), &config, cb),
            )
        })?;
        list.counted()
    }
}

impl Drop for Speller<'_> {
    fn drop(&mut self) {
        unsafe { (self.library().api().speller_free)(self.raw) };
    }
}

impl std::fmt::Debug for Speller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speller").finish_non_exhaustive()
    }
}
