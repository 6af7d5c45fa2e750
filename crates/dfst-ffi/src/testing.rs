// Shared helpers for the boundary tests

use std::cell::RefCell;
use std::io::Write;
use std::slice;

use dfst_core::abi::{ErrorCallback, RawHandle, Slice};
use dfst_core::error::NativeError;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

unsafe extern "C" fn capture(message: *const u8, len: usize) {
    let bytes = unsafe { slice::from_raw_parts(message, len) };
    let text = String::from_utf8_lossy(bytes).into_owned();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(text));
}

pub(crate) fn callback() -> ErrorCallback {
    Some(capture)
}

pub(crate) fn take_error() -> Option<NativeError> {
    LAST_ERROR
        .with(|slot| slot.borrow_mut().take())
        .map(|text| NativeError::parse(&text))
}

pub(crate) fn view(text: &str) -> Slice<u8> {
    Slice {
        data: text.as_ptr().cast_mut(),
        len: text.len(),
    }
}

/// Copy owned text out and release it.
pub(crate) fn take_string(owned: Slice<u8>) -> String {
    let text = String::from_utf8(unsafe { crate::strings::borrow_bytes(owned) }.to_vec()).unwrap();
    unsafe { crate::strings::DFST_string_free(owned) };
    text
}

pub(crate) const SAMI: &str = r#"
[info]
locale = "se"
title = "Davvisámegiella"

[speller]
words = ["boahtin", "boahtit", "sámegiella", "giella"]
"#;

pub(crate) fn fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Open `contents` as an archive, failing the test on error.
pub(crate) fn open_archive(contents: &str) -> (tempfile::NamedTempFile, RawHandle) {
    let file = fixture(contents);
    let path = file.path().to_str().unwrap().to_string();
    let raw = unsafe { crate::DFST_SpellerArchive_open(view(&path), callback()) };
    assert_eq!(take_error(), None);
    assert!(!raw.is_null());
    (file, raw)
}

pub(crate) fn open_speller(contents: &str) -> (tempfile::NamedTempFile, RawHandle, RawHandle) {
    let (file, archive) = open_archive(contents);
    let speller = unsafe { crate::DFST_SpellerArchive_speller(archive, callback()) };
    assert_eq!(take_error(), None);
    assert!(!speller.is_null());
    (file, archive, speller)
}
