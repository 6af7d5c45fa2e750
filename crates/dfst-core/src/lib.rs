//! Types shared by both sides of the divvun-fst C boundary.
//!
//! - [`abi`] -- `#[repr(C)]` shapes that cross the boundary by value
//! - [`error`] -- error kinds and the message codec used by the error channel
//! - [`suggestion`] -- the suggestion record and its completion tri-state
//! - [`character`] -- character classification used by the tokenizer
//! - [`token`] -- token types and word context records

pub mod abi;
pub mod character;
pub mod error;
pub mod suggestion;
pub mod token;
