// Speller exports

use dfst_core::abi::{ErrorCallback, FfiSpellerConfig, RawHandle, Slice};
use dfst_core::suggestion::Suggestion;
use dfst_engine::speller::SpellerConfig;

use crate::error::{contain, guard};
use crate::handle::{Opaque, SpellerRef};
use crate::strings::borrow_str;
use crate::suggestions::owned_suggestions;

/// Engine configuration for an ABI config.
///
/// `n_best == 0` and a weight of zero or below mean "no limit". A zero
/// `lookup_budget` keeps the default budget.
fn speller_config(ffi: &FfiSpellerConfig) -> SpellerConfig {
    let defaults = SpellerConfig::default();
    SpellerConfig {
        n_best: (ffi.n_best > 0).then_some(ffi.n_best),
        max_weight: (ffi.max_weight > 0.0).then_some(ffi.max_weight),
        beam: (ffi.beam > 0.0).then_some(ffi.beam),
        lookup_budget: if ffi.lookup_budget == 0 {
            defaults.lookup_budget
        } else {
            ffi.lookup_budget
        },
        recase: ffi.recase != 0,
    }
}

/// Check whether `word` is correct. Returns 1 if it is, 0 if it is not or
/// on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_Speller_isCorrect(
    handle: RawHandle,
    word: Slice<u8>,
    callback: ErrorCallback,
) -> u8 {
    guard("DFST_Speller_isCorrect", callback, 0, || {
        let speller = unsafe { SpellerRef::borrow_raw(handle) }?;
        let word = unsafe { borrow_str(word, "word") }?;
        Ok(u8::from(speller.is_correct(word)))
    })
}

/// Ranked suggestions for `word`, best first. Caller frees with
/// `DFST_VecSuggestion_free`.
///
/// A null result without an error means there are no suggestions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_Speller_suggest(
    handle: RawHandle,
    word: Slice<u8>,
    callback: ErrorCallback,
) -> Slice<Suggestion> {
    guard("DFST_Speller_suggest", callback, Slice::null(), || {
        let speller = unsafe { SpellerRef::borrow_raw(handle) }?;
        let word = unsafe { borrow_str(word, "word") }?;
        let list = speller.suggest(word);
        tracing::debug!(word, count = list.len(), "suggest");
        Ok(owned_suggestions(list))
    })
}

/// Like `DFST_Speller_suggest`, tuned by `config`. A null `config` means
/// defaults.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_Speller_suggestWithConfig(
    handle: RawHandle,
    word: Slice<u8>,
    config: *const FfiSpellerConfig,
    callback: ErrorCallback,
) -> Slice<Suggestion> {
    guard("DFST_Speller_suggestWithConfig", callback, Slice::null(), || {
        let speller = unsafe { SpellerRef::borrow_raw(handle) }?;
        let word = unsafe { borrow_str(word, "word") }?;
        let config = match unsafe { config.as_ref() } {
            Some(ffi) => speller_config(ffi),
            None => SpellerConfig::default(),
        };
        let list = speller.suggest_with_config(word, &config);
        tracing::debug!(word, count = list.len(), ?config, "suggest with config");
        Ok(owned_suggestions(list))
    })
}

/// Release a speller handle. Null is a no-op; a handle of another kind is
/// left alone.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn DFST_Speller_free(handle: RawHandle) {
    if handle.is_null() {
        return;
    }
    contain("DFST_Speller_free", (), || {
        if let Err(err) = unsafe { SpellerRef::release_raw(handle) } {
            tracing::warn!(error = %err, "speller handle not released");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crate::{DFST_SpellerArchive_free, DFST_VecSuggestion_free, DFST_VecSuggestion_getValue, DFST_VecSuggestion_len};
    use dfst_core::error::ErrorKind;
    use dfst_engine::speller::{DEFAULT_LOOKUP_BUDGET, DEFAULT_N_BEST};
    use std::ptr;

    fn values(list: Slice<Suggestion>) -> Vec<String> {
        let len = unsafe { DFST_VecSuggestion_len(list, callback()) };
        let values = (0..len)
            .map(|i| take_string(unsafe { DFST_VecSuggestion_getValue(list, i, callback()) }))
            .collect();
        unsafe { DFST_VecSuggestion_free(list) };
        values
    }

    #[test]
    fn config_zero_fields_mean_no_limit() {
        let config = speller_config(&FfiSpellerConfig::default());
        assert_eq!(config.n_best, None);
        assert_eq!(config.max_weight, None);
        assert_eq!(config.beam, None);
        assert_eq!(config.lookup_budget, DEFAULT_LOOKUP_BUDGET);
        assert!(config.recase);
    }

    #[test]
    fn zero_n_best_returns_every_candidate() {
        // Fifteen two-letter words, each one substitution away from "za".
        let words: Vec<String> = "bcdfghjklmnprst"
            .chars()
            .map(|c| format!("\"{c}a\""))
            .collect();
        let lexicon = format!("[speller]\nwords = [{}]\n", words.join(", "));
        let (_file, archive, speller) = open_speller(&lexicon);

        let unlimited = FfiSpellerConfig::default();
        let list = unsafe {
            DFST_Speller_suggestWithConfig(speller, view("za"), &unlimited, callback())
        };
        assert_eq!(take_error(), None);
        assert_eq!(values(list).len(), 15);

        // The plain call keeps the default limit.
        let list = unsafe { DFST_Speller_suggest(speller, view("za"), callback()) };
        assert_eq!(values(list).len(), DEFAULT_N_BEST);
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }

    #[test]
    fn config_fields_are_carried() {
        let config = speller_config(&FfiSpellerConfig {
            n_best: 3,
            max_weight: 2.5,
            beam: 1.0,
            lookup_budget: 50,
            recase: 0,
        });
        assert_eq!(config.n_best, Some(3));
        assert_eq!(config.max_weight, Some(2.5));
        assert_eq!(config.beam, Some(1.0));
        assert_eq!(config.lookup_budget, 50);
        assert!(!config.recase);
    }

    #[test]
    fn is_correct() {
        let (_file, archive, speller) = open_speller(SAMI);
        assert_eq!(unsafe { DFST_Speller_isCorrect(speller, view("boahtin"), callback()) }, 1);
        assert_eq!(unsafe { DFST_Speller_isCorrect(speller, view("boatin"), callback()) }, 0);
        assert_eq!(take_error(), None);
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }

    #[test]
    fn is_correct_with_archive_handle_is_invalid() {
        let (_file, archive) = open_archive(SAMI);
        assert_eq!(unsafe { DFST_Speller_isCorrect(archive, view("boahtin"), callback()) }, 0);
        assert_eq!(take_error().unwrap().kind, Some(ErrorKind::InvalidHandle));
        unsafe { DFST_SpellerArchive_free(archive) };
    }

    #[test]
    fn suggest_ranks_best_first() {
        let (_file, archive, speller) = open_speller(SAMI);
        let list = unsafe { DFST_Speller_suggest(speller, view("boatin"), callback()) };
        assert_eq!(take_error(), None);
        assert_eq!(values(list)[0], "boahtin");
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }

    #[test]
    fn no_suggestions_is_null_without_error() {
        let (_file, archive, speller) = open_speller(SAMI);
        let list = unsafe { DFST_Speller_suggest(speller, view("xyzzyq"), callback()) };
        assert!(list.is_null());
        assert_eq!(take_error(), None);
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }

    #[test]
    fn suggest_with_config_limits_count() {
        let (_file, archive, speller) = open_speller(SAMI);
        let config = FfiSpellerConfig {
            n_best: 1,
            ..FfiSpellerConfig::default()
        };
        let list = unsafe {
            DFST_Speller_suggestWithConfig(speller, view("boahti"), &config, callback())
        };
        assert_eq!(values(list), ["boahtin"]);

        let list = unsafe {
            DFST_Speller_suggestWithConfig(speller, view("boahti"), ptr::null(), callback())
        };
        assert_eq!(values(list), ["boahtin", "boahtit"]);
        assert_eq!(take_error(), None);
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }

    #[test]
    fn suggest_invalid_utf8_reports_invalid_input() {
        let (_file, archive, speller) = open_speller(SAMI);
        let bytes = [0xffu8];
        let word = Slice {
            data: bytes.as_ptr().cast_mut(),
            len: 1,
        };
        let list = unsafe { DFST_Speller_suggest(speller, word, callback()) };
        assert!(list.is_null());
        assert_eq!(take_error().unwrap().kind, Some(ErrorKind::InvalidInput));
        unsafe {
            DFST_Speller_free(speller);
            DFST_SpellerArchive_free(archive);
        }
    }
}
