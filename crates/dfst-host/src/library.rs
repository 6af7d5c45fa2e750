// Binding to the boundary: configuration, the bound library, and the
// once-only service that hands it out

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::api::NativeApi;
use crate::Result;

/// Environment variable naming a shared library to load instead of the
/// linked-in symbols.
pub const LIBRARY_PATH_ENV: &str = "DFST_LIBRARY_PATH";

/// Where the boundary symbols come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LibrarySource {
    /// The dfst-ffi crate linked into this binary.
    #[default]
    Linked,
    /// A prebuilt `libdfst_ffi` shared library.
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryConfig {
    pub source: LibrarySource,
}

impl LibraryConfig {
    pub fn linked() -> Self {
        Self {
            source: LibrarySource::Linked,
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: LibrarySource::Path(path.into()),
        }
    }

    /// Read `DFST_LIBRARY_PATH`; unset or empty means the linked symbols.
    pub fn from_env() -> Self {
        match std::env::var_os(LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::path(path),
            _ => Self::linked(),
        }
    }
}

/// A bound set of boundary symbols.
///
/// Every wrapper holds on to the `Library` it was created from and releases
/// its native resources through it.
pub struct Library {
    api: NativeApi,
    source: LibrarySource,
}

impl Library {
    pub fn open(config: &LibraryConfig) -> Result<Self> {
        match &config.source {
            LibrarySource::Linked => Self::linked(),
            LibrarySource::Path(path) => Ok(Self {
                api: NativeApi::load(path)?,
                source: config.source.clone(),
            }),
        }
    }

    /// The statically linked symbols.
    pub fn linked() -> Result<Self> {
        #[cfg(feature = "linked")]
        {
            Ok(Self {
                api: NativeApi::linked(),
                source: LibrarySource::Linked,
            })
        }
        #[cfg(not(feature = "linked"))]
        {
            Err(crate::Error::NotLinked)
        }
    }

    /// A library over a hand-built symbol table.
    #[cfg(test)]
    pub(crate) fn with_api(api: NativeApi) -> Self {
        Self {
            api,
            source: LibrarySource::Linked,
        }
    }

    pub fn source(&self) -> &LibrarySource {
        &self.source
    }

    pub(crate) fn api(&self) -> &NativeApi {
        &self.api
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Binds the library on first use and shares it afterwards.
///
/// Construct one per application and pass the `Arc<Library>` it hands out
/// to whatever opens archives.
pub struct LibraryService {
    config: LibraryConfig,
    library: OnceCell<Arc<Library>>,
}

impl LibraryService {
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            library: OnceCell::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(LibraryConfig::from_env())
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// The bound library, binding it on the first call. A failed attempt is
    /// not cached; the next call tries again.
    pub fn get(&self) -> Result<Arc<Library>> {
        self.library
            .get_or_try_init(|| {
                tracing::debug!(source = ?self.config.source, "binding boundary library");
                Library::open(&self.config).map(Arc::new)
            })
            .cloned()
    }
}
