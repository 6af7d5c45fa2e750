// The boundary's symbol table, as plain function pointers
//
// Both binding modes produce the same table: statically linked symbols from
// the dfst-ffi rlib, or symbols resolved from a shared library at runtime.
// Wrappers only ever call through this table.

use std::ffi::c_char;
use std::path::Path;

use dfst_core::abi::{CWordContext, CursorHandle, ErrorCallback, FfiSpellerConfig, RawHandle, Slice};
use dfst_core::suggestion::Suggestion;

use crate::{Error, Result};

/// Suggestion collection as returned by the boundary. Opaque to the host.
pub(crate) type RawSuggestions = Slice<Suggestion>;

pub(crate) struct NativeApi {
    pub(crate) archive_open: unsafe extern "C" fn(Slice<u8>, ErrorCallback) -> RawHandle,
    pub(crate) archive_speller: unsafe extern "C" fn(RawHandle, ErrorCallback) -> RawHandle,
    pub(crate) archive_locale: unsafe extern "C" fn(RawHandle, ErrorCallback) -> Slice<u8>,
    pub(crate) archive_free: unsafe extern "C" fn(RawHandle),
    pub(crate) speller_is_correct: unsafe extern "C" fn(RawHandle, Slice<u8>, ErrorCallback) -> u8,
    pub(crate) speller_suggest:
        unsafe extern "C" fn(RawHandle, Slice<u8>, ErrorCallback) -> RawSuggestions,
    pub(crate) speller_suggest_with_config: unsafe extern "C" fn(
        RawHandle,
        Slice<u8>,
        *const FfiSpellerConfig,
        ErrorCallback,
    ) -> RawSuggestions,
    pub(crate) speller_free: unsafe extern "C" fn(RawHandle),
    pub(crate) vec_len: unsafe extern "C" fn(RawSuggestions, ErrorCallback) -> usize,
    pub(crate) vec_value: unsafe extern "C" fn(RawSuggestions, usize, ErrorCallback) -> Slice<u8>,
    pub(crate) vec_weight: unsafe extern "C" fn(RawSuggestions, usize, ErrorCallback) -> f32,
    pub(crate) vec_completed: unsafe extern "C" fn(RawSuggestions, usize, ErrorCallback) -> u8,
    pub(crate) vec_free: unsafe extern "C" fn(RawSuggestions),
    pub(crate) string_free: unsafe extern "C" fn(Slice<u8>),
    pub(crate) cstr_free: unsafe extern "C" fn(*mut c_char),
    pub(crate) word_indices_new: unsafe extern "C" fn(*const c_char) -> *mut CursorHandle,
    pub(crate) word_indices_from_slice:
        unsafe extern "C" fn(Slice<u8>, ErrorCallback) -> *mut CursorHandle,
    pub(crate) word_indices_next:
        unsafe extern "C" fn(*mut CursorHandle, *mut u64, *mut *mut c_char) -> u8,
    pub(crate) word_indices_free: unsafe extern "C" fn(*mut CursorHandle),
    pub(crate) cursor_context:
        unsafe extern "C" fn(Slice<u8>, Slice<u8>, ErrorCallback) -> CWordContext,
    pub(crate) word_context_free: unsafe extern "C" fn(CWordContext),
    // Keeps a loaded library mapped for as long as the pointers above live.
    _library: Option<libloading::Library>,
}

/// Copy one function pointer out of a loaded library.
///
/// # Safety
/// `T` must be the exact type of the exported symbol `name`.
unsafe fn symbol<T: Copy>(library: &libloading::Library, name: &'static str) -> Result<T> {
    let symbol = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| Error::Symbol { name, source })?;
    Ok(*symbol)
}

impl NativeApi {
    /// The symbols of the statically linked dfst-ffi crate.
    #[cfg(feature = "linked")]
    pub(crate) fn linked() -> Self {
        use dfst_ffi as ffi;

        Self {
            archive_open: ffi::DFST_SpellerArchive_open,
            archive_speller: ffi::DFST_SpellerArchive_speller,
            archive_locale: ffi::DFST_SpellerArchive_locale,
            archive_free: ffi::DFST_SpellerArchive_free,
            speller_is_correct: ffi::DFST_Speller_isCorrect,
            speller_suggest: ffi::DFST_Speller_suggest,
            speller_suggest_with_config: ffi::DFST_Speller_suggestWithConfig,
            speller_free: ffi::DFST_Speller_free,
            vec_len: ffi::DFST_VecSuggestion_len,
            vec_value: ffi::DFST_VecSuggestion_getValue,
            vec_weight: ffi::DFST_VecSuggestion_getWeight,
            vec_completed: ffi::DFST_VecSuggestion_getCompleted,
            vec_free: ffi::DFST_VecSuggestion_free,
            string_free: ffi::DFST_string_free,
            cstr_free: ffi::DFST_cstr_free,
            word_indices_new: ffi::DFST_WordIndices_new,
            word_indices_from_slice: ffi::DFST_WordIndices_fromSlice,
            word_indices_next: ffi::DFST_WordIndices_next,
            word_indices_free: ffi::DFST_WordIndices_free,
            cursor_context: ffi::DFST_Tokenizer_cursorContext,
            word_context_free: ffi::DFST_WordContext_free,
            _library: None,
        }
    }

    /// Resolve every symbol from the shared library at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        // SAFETY: loading runs the library's initialisers; the path is
        // configured by the embedding application and trusted.
        let library = unsafe { libloading::Library::new(path) }.map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: each type below is the declared signature of its symbol.
        let api = unsafe {
            Self {
                archive_open: symbol(&library, "DFST_SpellerArchive_open")?,
                archive_speller: symbol(&library, "DFST_SpellerArchive_speller")?,
                archive_locale: symbol(&library, "DFST_SpellerArchive_locale")?,
                archive_free: symbol(&library, "DFST_SpellerArchive_free")?,
                speller_is_correct: symbol(&library, "DFST_Speller_isCorrect")?,
                speller_suggest: symbol(&library, "DFST_Speller_suggest")?,
                speller_suggest_with_config: symbol(&library, "DFST_Speller_suggestWithConfig")?,
                speller_free: symbol(&library, "DFST_Speller_free")?,
                vec_len: symbol(&library, "DFST_VecSuggestion_len")?,
                vec_value: symbol(&library, "DFST_VecSuggestion_getValue")?,
                vec_weight: symbol(&library, "DFST_VecSuggestion_getWeight")?,
                vec_completed: symbol(&library, "DFST_VecSuggestion_getCompleted")?,
                vec_free: symbol(&library, "DFST_VecSuggestion_free")?,
                string_free: symbol(&library, "DFST_string_free")?,
                cstr_free: symbol(&library, "DFST_cstr_free")?,
                word_indices_new: symbol(&library, "DFST_WordIndices_new")?,
                word_indices_from_slice: symbol(&library, "DFST_WordIndices_fromSlice")?,
                word_indices_next: symbol(&library, "DFST_WordIndices_next")?,
                word_indices_free: symbol(&library, "DFST_WordIndices_free")?,
                cursor_context: symbol(&library, "DFST_Tokenizer_cursorContext")?,
                word_context_free: symbol(&library, "DFST_WordContext_free")?,
                _library: None,
            }
        };

        tracing::debug!(path = %path.display(), "loaded boundary library");
        Ok(Self {
            _library: Some(library),
            ..api
        })
    }
}
