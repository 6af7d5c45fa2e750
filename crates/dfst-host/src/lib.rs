//! Safe wrapper over the divvun-fst C boundary.
//!
//! - [`Library`] / [`LibraryService`] -- the bound set of boundary symbols,
//!   linked in or loaded from a shared library, initialised once
//! - [`SpellerArchive`] / [`Speller`] -- owned handles, released on drop
//! - [`SuggestionList`] -- ranked suggestions read lazily by index
//! - [`WordIndices`] -- word cursor as an iterator
//!
//! Every boundary call goes through a per-thread error channel and comes back
//! as a [`Result`]. Nothing outside this crate touches raw pointers.

mod api;
mod archive;
mod channel;
mod context;
mod cursor;
mod error;
mod library;
mod options;
mod suggestions;
mod text;

pub use archive::{Speller, SpellerArchive};
pub use cursor::WordIndices;
pub use dfst_core::error::ErrorKind;
pub use dfst_core::suggestion::Suggestion;
pub use dfst_core::token::{IndexedWord, WordContext};
pub use error::Error;
pub use library::{LIBRARY_PATH_ENV, Library, LibraryConfig, LibraryService, LibrarySource};
pub use options::SuggestOptions;
pub use suggestions::{SuggestionIter, SuggestionList};

pub type Result<T, E = Error> = std::result::Result<T, E>;
