// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]
// `Suggestion` only ever crosses the boundary behind a pointer.
#![allow(improper_ctypes_definitions)]

// dfst-ffi: C-compatible boundary over the divvun-fst engine.
//
// Exported symbols carry the `DFST_` prefix. Consumers in any language with C
// FFI support bind against them; `include/divvun_fst.h` declares them.
//
// Memory management rules:
// - Text arguments are `Slice<u8>` views, UTF-8, borrowed for the call only.
// - Archive and speller handles: `RawHandle` fat pointers, released with
//   `DFST_SpellerArchive_free` / `DFST_Speller_free`. A speller shares the
//   engine data of its archive, so either may be released first.
// - Returned text: caller frees with `DFST_string_free`.
// - Returned suggestion collections: caller frees with `DFST_VecSuggestion_free`.
// - Cursor words: caller frees with `DFST_cstr_free`.
// - Cursors: caller frees with `DFST_WordIndices_free`, exactly once.
// - Cursor contexts: caller frees with `DFST_WordContext_free`.
//
// Error reporting: fallible calls take an `ErrorCallback` as their last
// argument. On failure it is invoked once, before the call returns, with a
// `<code>: <detail>` message, and the call returns its sentinel (null handle,
// null slice, zero). Panics are caught and reported as `panic` errors.

mod archive;
mod error;
mod handle;
#[cfg(feature = "logging")]
mod logging;
mod speller;
mod strings;
mod suggestions;
mod tokenizer;

#[cfg(test)]
mod testing;

pub use archive::{
    DFST_SpellerArchive_free, DFST_SpellerArchive_locale, DFST_SpellerArchive_open,
    DFST_SpellerArchive_speller,
};
#[cfg(feature = "logging")]
pub use logging::DFST_enableLogging;
pub use speller::{
    DFST_Speller_free, DFST_Speller_isCorrect, DFST_Speller_suggest,
    DFST_Speller_suggestWithConfig,
};
pub use strings::{DFST_cstr_free, DFST_string_free};
pub use suggestions::{
    DFST_VecSuggestion_free, DFST_VecSuggestion_getCompleted, DFST_VecSuggestion_getValue,
    DFST_VecSuggestion_getWeight, DFST_VecSuggestion_len,
};
pub use tokenizer::{
    DFST_Tokenizer_cursorContext, DFST_WordContext_free, DFST_WordIndices_free,
    DFST_WordIndices_fromSlice, DFST_WordIndices_new, DFST_WordIndices_next,
};
