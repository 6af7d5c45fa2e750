// Error taxonomy of the boundary and the message codec of the error channel.
//
// The error callback only carries bytes, so the kind travels inside the
// message as a `<code>: <detail>` prefix. Both sides use this module, which
// keeps the encoding in one place.

use std::fmt;

/// Classes of failure a boundary call can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Resource not found or unreadable.
    Io,
    /// Malformed native resource.
    Format,
    /// Requested capability is absent (e.g. no speller in the archive).
    Unsupported,
    /// Archive carries no metadata or no locale tag.
    MissingMetadata,
    /// Collection index out of range.
    Index,
    /// Native allocation failed. Never sent as a message: it is what a
    /// sentinel without a message means.
    Allocation,
    /// Null handle, or a handle of the wrong kind.
    InvalidHandle,
    /// Input text is not valid UTF-8 or contains a NUL byte.
    InvalidInput,
    /// The native side panicked; the panic was stopped at the boundary.
    Panic,
}

impl ErrorKind {
    const ALL: [ErrorKind; 9] = [
        ErrorKind::Io,
        ErrorKind::Format,
        ErrorKind::Unsupported,
        ErrorKind::MissingMetadata,
        ErrorKind::Index,
        ErrorKind::Allocation,
        ErrorKind::InvalidHandle,
        ErrorKind::InvalidInput,
        ErrorKind::Panic,
    ];

    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Format => "format",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::MissingMetadata => "missing-metadata",
            ErrorKind::Index => "index",
            ErrorKind::Allocation => "allocation",
            ErrorKind::InvalidHandle => "invalid-handle",
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::Panic => "panic",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A failure as it travels through the error channel.
///
/// `Display` produces the wire form, `parse` reads it back. A message without
/// a recognised code prefix parses with `kind == None` and the whole text as
/// the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl NativeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: message.into(),
        }
    }

    pub fn parse(text: &str) -> Self {
        if let Some((code, detail)) = text.split_once(": ") {
            if let Some(kind) = ErrorKind::from_code(code) {
                return Self {
                    kind: Some(kind),
                    message: detail.to_string(),
                };
            }
        }
        Self {
            kind: None,
            message: text.to_string(),
        }
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{}: {}", kind.code(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for NativeError {}
