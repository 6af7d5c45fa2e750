// Archive errors and their boundary classification

use dfst_core::error::{ErrorKind, NativeError};

/// Errors that can occur when opening or using a speller archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The archive file could not be read.
    #[error("failed to read archive `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive contents could not be parsed.
    #[error("malformed archive: {0}")]
    Format(String),

    /// The archive holds no usable speller.
    #[error("archive contains no speller")]
    NoSpeller,

    /// The archive has no metadata, or the metadata has no locale.
    #[error("archive has no locale metadata")]
    NoMetadata,
}

impl ArchiveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchiveError::Io { .. } => ErrorKind::Io,
            ArchiveError::Format(_) => ErrorKind::Format,
            ArchiveError::NoSpeller => ErrorKind::Unsupported,
            ArchiveError::NoMetadata => ErrorKind::MissingMetadata,
        }
    }
}

impl From<ArchiveError> for NativeError {
    fn from(err: ArchiveError) -> Self {
        NativeError::new(err.kind(), err.to_string())
    }
}
