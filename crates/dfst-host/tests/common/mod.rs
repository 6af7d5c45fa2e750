//! Shared fixtures for the wrapper integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Once};

use dfst_host::{Library, LibraryConfig, LibraryService, SpellerArchive};

pub const SAMI: &str = r#"
[info]
locale = "se"
title = "Davvisámegiella"

[speller]
words = ["boahtin", "boahtit", "sámegiella", "giella", "This", "is", "a", "test"]
partial = ["sámegi"]

[speller.weights]
giella = 0.5
"#;

pub const NO_METADATA: &str = r#"
[speller]
words = ["sana"]
"#;

pub const NO_SPELLER: &str = r#"
[info]
locale = "fi"
"#;

static TRACING: Once = Once::new();

/// Route wrapper logs through the test harness. `RUST_LOG` selects levels.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn library() -> Arc<Library> {
    init_tracing();
    LibraryService::new(LibraryConfig::default())
        .get()
        .unwrap_or_else(|e| panic!("failed to bind library: {e}"))
}

pub fn fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Open `contents` as an archive. Keep the file alive alongside it.
pub fn archive(contents: &str) -> (tempfile::NamedTempFile, SpellerArchive) {
    let file = fixture(contents);
    let archive = SpellerArchive::open(library(), file.path())
        .unwrap_or_else(|e| panic!("failed to open fixture archive: {e}"));
    (file, archive)
}
