//! Handling of speller archives.

pub mod error;
pub mod lexicon;
pub mod meta;

use std::path::Path;
use std::sync::Arc;

use crate::speller::Speller;

pub use self::error::ArchiveError;
pub use self::lexicon::LexiconArchive;
pub use self::meta::{SpellerInfo, SpellerMetadata};

/// A loaded archive holding a speller and its metadata.
pub trait SpellerArchive {
    /// Retrieve the speller.
    ///
    /// Fails with [`ArchiveError::NoSpeller`] when the archive has none.
    fn speller(&self) -> Result<Arc<dyn Speller + Send + Sync>, ArchiveError>;

    /// Retrieve the metadata, if the archive has any.
    fn metadata(&self) -> Option<&SpellerMetadata>;

    /// The locale tag from the metadata.
    fn locale(&self) -> Result<&str, ArchiveError> {
        self.metadata()
            .map(|meta| meta.info().locale())
            .filter(|locale| !locale.is_empty())
            .ok_or(ArchiveError::NoMetadata)
    }
}

/// Read and parse a speller archive from `path`.
pub fn open<P>(path: P) -> Result<Arc<dyn SpellerArchive + Send + Sync>, ArchiveError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ArchiveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let archive = LexiconArchive::from_bytes(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        locale = archive.locale().unwrap_or("<none>"),
        "opened speller archive"
    );
    Ok(Arc::new(archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = open(&path).err().unwrap();
        assert!(matches!(err, ArchiveError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn open_reads_lexicon_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[info]\nlocale = \"se\"\n\n[speller]\nwords = [\"boahtin\"]").unwrap();
        let archive = open(file.path()).unwrap();
        assert_eq!(archive.locale().unwrap(), "se");
        assert!(archive.speller().unwrap().is_correct("boahtin"));
    }

    #[test]
    fn open_binary_garbage_is_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x01]).unwrap();
        let err = open(file.path()).err().unwrap();
        assert!(matches!(err, ArchiveError::Format(_)));
    }
}
