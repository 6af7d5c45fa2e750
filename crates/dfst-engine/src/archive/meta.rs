// Speller archive metadata

use serde::Deserialize;

/// Metadata carried by a speller archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellerMetadata {
    pub info: SpellerInfo,
}

impl SpellerMetadata {
    pub fn info(&self) -> &SpellerInfo {
        &self.info
    }
}

/// Descriptive information about the speller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpellerInfo {
    /// BCP 47 locale tag, e.g. `se`.
    pub locale: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl SpellerInfo {
    pub fn locale(&self) -> &str {
        &self.locale
    }
}
