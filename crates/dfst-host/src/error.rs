// Host-side error type

use std::path::PathBuf;

use dfst_core::error::{ErrorKind, NativeError};

/// Errors returned by the wrapper.
///
/// The first group mirrors the boundary's error codes; the rest arise on the
/// host side.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(String),

    #[error("format: {0}")]
    Format(String),

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("missing-metadata: {0}")]
    MissingMetadata(String),

    #[error("index: {0}")]
    Index(String),

    /// A call returned its sentinel without reporting an error.
    #[error("allocation: native call returned no {0}")]
    Allocation(&'static str),

    #[error("invalid-handle: {0}")]
    InvalidHandle(String),

    #[error("invalid-input: {0}")]
    InvalidInput(String),

    #[error("panic: {0}")]
    Panic(String),

    /// A reported message without a known code.
    #[error("native error: {0}")]
    Native(String),

    #[error("failed to load boundary library `{path}`: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("boundary library has no symbol `{name}`: {source}")]
    Symbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("boundary symbols are not linked in; configure a library path")]
    NotLinked,

    #[error("invalid-input: text contains a NUL byte")]
    InteriorNul(#[from] std::ffi::NulError),
}

impl Error {
    /// Boundary error code this error corresponds to, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Io(_) => Some(ErrorKind::Io),
            Error::Format(_) => Some(ErrorKind::Format),
            Error::Unsupported(_) => Some(ErrorKind::Unsupported),
            Error::MissingMetadata(_) => Some(ErrorKind::MissingMetadata),
            Error::Index(_) => Some(ErrorKind::Index),
            Error::Allocation(_) => Some(ErrorKind::Allocation),
            Error::InvalidHandle(_) => Some(ErrorKind::InvalidHandle),
            Error::InvalidInput(_) | Error::InteriorNul(_) => Some(ErrorKind::InvalidInput),
            Error::Panic(_) => Some(ErrorKind::Panic),
            Error::Native(_)
            | Error::Load { .. }
            | Error::Symbol { .. }
            | Error::NotLinked => None,
        }
    }

    /// Convert a message read from the error channel.
    pub fn from_native(err: NativeError) -> Self {
        let NativeError { kind, message } = err;
        match kind {
            Some(ErrorKind::Io) => Error::Io(message),
            Some(ErrorKind::Format) => Error::Format(message),
            Some(ErrorKind::Unsupported) => Error::Unsupported(message),
            Some(ErrorKind::MissingMetadata) => Error::MissingMetadata(message),
            Some(ErrorKind::Index) => Error::Index(message),
            Some(ErrorKind::InvalidHandle) => Error::InvalidHandle(message),
            Some(ErrorKind::InvalidInput) => Error::InvalidInput(message),
            Some(ErrorKind::Panic) => Error::Panic(message),
            // Never sent by the boundary; keep the text rather than guess.
            Some(ErrorKind::Allocation) | None => Error::Native(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_native_keeps_kind_and_message() {
        let err = Error::from_native(NativeError::parse("io: failed to read `x.toml`"));
        assert_eq!(err.kind(), Some(ErrorKind::Io));
        assert_eq!(err.to_string(), "io: failed to read `x.toml`");
    }

    #[test]
    fn unprefixed_message_is_unclassified() {
        let err = Error::from_native(NativeError::parse("boom"));
        assert!(matches!(err, Error::Native(ref m) if m == "boom"));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn every_wire_kind_round_trips() {
        for kind in [
            ErrorKind::Io,
            ErrorKind::Format,
            ErrorKind::Unsupported,
            ErrorKind::MissingMetadata,
            ErrorKind::Index,
            ErrorKind::InvalidHandle,
            ErrorKind::InvalidInput,
            ErrorKind::Panic,
        ] {
            let err = Error::from_native(NativeError::new(kind, "detail"));
            assert_eq!(err.kind(), Some(kind));
            assert_eq!(err.to_string(), format!("{}: detail", kind.code()));
        }
    }

    #[test]
    fn nul_error_is_invalid_input() {
        let err: Error = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidInput));
    }
}
