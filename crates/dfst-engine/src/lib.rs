//! The spell-checking engine fronted by the divvun-fst C boundary.
//!
//! - [`archive`] -- opening speller archives and reading their metadata
//! - [`speller`] -- the [`Speller`](speller::Speller) trait and the lexicon speller
//! - [`suggestion`] -- edit-based suggestion generation
//! - [`tokenizer`] -- word segmentation and cursor context

pub mod archive;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;
