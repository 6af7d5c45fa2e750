// Lexicon archive: a TOML file with an optional `[info]` table and an
// optional `[speller]` table listing the accepted word-forms.
//
//   [info]
//   locale = "se"
//
//   [speller]
//   words = ["boahtin", "sámegiella"]
//   partial = ["sámegi"]
//
//   [speller.weights]
//   boahtin = 0.5

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use super::error::ArchiveError;
use super::meta::{SpellerInfo, SpellerMetadata};
use super::SpellerArchive;
use crate::speller::Speller;
use crate::speller::lexicon::LexiconSpeller;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    info: Option<SpellerInfo>,
    #[serde(default)]
    speller: Option<LexiconSection>,
}

#[derive(Debug, Default, Deserialize)]
struct LexiconSection {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    partial: Vec<String>,
    #[serde(default)]
    weights: BTreeMap<String, f32>,
}

/// Archive backed by a TOML word list.
pub struct LexiconArchive {
    metadata: Option<SpellerMetadata>,
    speller: Option<Arc<LexiconSpeller>>,
}

impl LexiconArchive {
    /// Parse an archive from raw file contents.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ArchiveError::Format(format!("archive is not valid UTF-8: {e}")))?;
        Self::from_toml(text)
    }

    /// Parse an archive from its TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ArchiveError> {
        let file: LexiconFile =
            toml::from_str(text).map_err(|e| ArchiveError::Format(e.message().to_string()))?;

        let speller = match file.speller {
            Some(section) if !section.words.is_empty() => Some(Arc::new(LexiconSpeller::new(
                &section.words,
                &section.partial,
                &section.weights,
            ))),
            _ => None,
        };

        Ok(Self {
            metadata: file.info.map(|info| SpellerMetadata { info }),
            speller,
        })
    }
}

impl SpellerArchive for LexiconArchive {
    fn speller(&self) -> Result<Arc<dyn Speller + Send + Sync>, ArchiveError> {
        match &self.speller {
            Some(speller) => Ok(Arc::clone(speller) as Arc<dyn Speller + Send + Sync>),
            None => Err(ArchiveError::NoSpeller),
        }
    }

    fn metadata(&self) -> Option<&SpellerMetadata> {
        self.metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMI: &str = r#"
[info]
locale = "se"
title = "Davvisámegiella"

[speller]
words = ["boahtin", "sámegiella"]
"#;

    #[test]
    fn reads_metadata_and_speller() {
        let archive = LexiconArchive::from_toml(SAMI).unwrap();
        let meta = archive.metadata().unwrap();
        assert_eq!(meta.info().locale(), "se");
        assert_eq!(meta.info.title.as_deref(), Some("Davvisámegiella"));
        assert!(archive.speller().is_ok());
    }

    #[test]
    fn missing_info_means_no_locale() {
        let archive = LexiconArchive::from_toml("[speller]\nwords = [\"a\"]").unwrap();
        assert!(archive.metadata().is_none());
        assert!(matches!(archive.locale(), Err(ArchiveError::NoMetadata)));
    }

    #[test]
    fn empty_locale_means_no_locale() {
        let archive =
            LexiconArchive::from_toml("[info]\nlocale = \"\"\n[speller]\nwords = [\"a\"]").unwrap();
        assert!(matches!(archive.locale(), Err(ArchiveError::NoMetadata)));
    }

    #[test]
    fn missing_or_empty_word_list_means_no_speller() {
        let archive = LexiconArchive::from_toml("[info]\nlocale = \"se\"").unwrap();
        assert!(matches!(archive.speller(), Err(ArchiveError::NoSpeller)));

        let archive =
            LexiconArchive::from_toml("[info]\nlocale = \"se\"\n[speller]\nwords = []").unwrap();
        assert!(matches!(archive.speller(), Err(ArchiveError::NoSpeller)));
    }

    #[test]
    fn malformed_toml_is_format_error() {
        let err = LexiconArchive::from_toml("[info\nlocale = se").err().unwrap();
        assert!(matches!(err, ArchiveError::Format(_)));
    }

    #[test]
    fn info_without_locale_is_format_error() {
        let err = LexiconArchive::from_toml("[info]\ntitle = \"x\"").err().unwrap();
        assert!(matches!(err, ArchiveError::Format(_)));
    }
}
